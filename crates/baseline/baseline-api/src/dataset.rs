//! Dataset identities and chart labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::policy::DatasetPolicy;

/// The published datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Temperature,
    HousePrice,
    Crime,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Temperature,
        DatasetKind::HousePrice,
        DatasetKind::Crime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Temperature => "temperature",
            DatasetKind::HousePrice => "house_price",
            DatasetKind::Crime => "crime",
        }
    }

    /// Preset policy for this dataset.
    pub fn policy(&self) -> DatasetPolicy {
        match self {
            DatasetKind::Temperature => DatasetPolicy::temperature(),
            DatasetKind::HousePrice => DatasetPolicy::house_price(),
            DatasetKind::Crime => DatasetPolicy::crime(),
        }
    }

    /// Default axis labels for this dataset.
    pub fn labels(&self) -> ChartLabels {
        let y_title = match self {
            DatasetKind::Temperature => "Temperature (℃)",
            DatasetKind::HousePrice => "Price ($)",
            DatasetKind::Crime => "Incidents of Crime per 100k People",
        };
        ChartLabels::new("Year", y_title)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "temperature" | "temp" => Ok(DatasetKind::Temperature),
            "house_price" | "house_prices" | "price" => Ok(DatasetKind::HousePrice),
            "crime" => Ok(DatasetKind::Crime),
            other => Err(format!(
                "unknown dataset '{}', expected one of: temperature, house-price, crime",
                other
            )),
        }
    }
}

/// Text placed on the composed chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: Option<String>,
    pub x_title: String,
    pub y_title: String,
}

impl ChartLabels {
    pub fn new(x_title: &str, y_title: &str) -> Self {
        Self {
            title: None,
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self::new("Year", "Value")
    }
}

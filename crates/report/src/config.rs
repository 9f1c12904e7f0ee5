//! Page configuration read from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use baseline_api::{ChartLabels, DatasetKind, DatasetPolicy};
use baseline_spi::{BaselineError, Result, SourceRef};
use serde::{Deserialize, Serialize};

/// Page-level configuration, usually read from `datadebunk.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_intro")]
    pub intro: Vec<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_datasets")]
    pub datasets: Vec<DatasetConfig>,
}

/// One dataset section of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub kind: DatasetKind,
    pub path: PathBuf,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default)]
    pub source: Option<SourceRef>,
    /// Overrides the kind's preset policy.
    #[serde(default)]
    pub policy: Option<DatasetPolicy>,
}

fn default_title() -> String {
    "DataDebunk".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("docs/index.html")
}

fn default_datasets() -> Vec<DatasetConfig> {
    DatasetKind::ALL
        .iter()
        .map(|&kind| DatasetConfig::preset(kind))
        .collect()
}

fn default_intro() -> Vec<String> {
    vec![
        "Claims in the news often compare only two data points, this year against last year, \
         with no sense of how much the numbers normally move."
            .to_string(),
        "Each chart below shows the full history, its average, a one standard deviation band \
         and a linear trend, and states whether the latest change stands out from that variation."
            .to_string(),
    ]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
            output: default_output(),
            datasets: default_datasets(),
        }
    }
}

impl ReportConfig {
    /// Read a TOML file. Relative dataset and output paths are resolved
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BaselineError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BaselineError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BaselineError::Config(format!("Failed to serialize config: {}", e)))
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        for dataset in &mut self.datasets {
            if dataset.path.is_relative() {
                dataset.path = base.join(&dataset.path);
            }
        }
    }
}

impl DatasetConfig {
    pub fn new(kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            heading: None,
            subheading: None,
            y_axis_title: None,
            source: None,
            policy: None,
        }
    }

    /// Published defaults for a dataset: file name, headings and source.
    pub fn preset(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Temperature => Self {
                heading: Some("Average Global Temperature".to_string()),
                source: Some(SourceRef {
                    label: "nasa.gov".to_string(),
                    url: "https://data.giss.nasa.gov/gistemp/".to_string(),
                }),
                ..Self::new(kind, "data/temperature_data.csv")
            },
            DatasetKind::HousePrice => Self {
                heading: Some("Average Home Prices, United States".to_string()),
                subheading: Some("Adjusted for Inflation".to_string()),
                source: Some(SourceRef {
                    label: "dqydj.com".to_string(),
                    url: "https://dqydj.com/historical-home-prices/".to_string(),
                }),
                ..Self::new(kind, "data/house_price_data.csv")
            },
            DatasetKind::Crime => Self {
                heading: Some("Crime Rate, United States".to_string()),
                ..Self::new(kind, "data/crime.csv")
            },
        }
    }

    pub fn effective_policy(&self) -> DatasetPolicy {
        self.policy.unwrap_or_else(|| self.kind.policy())
    }

    pub fn labels(&self) -> ChartLabels {
        let mut labels = self.kind.labels();
        if let Some(y_title) = &self.y_axis_title {
            labels.y_title = y_title.clone();
        }
        labels
    }

    pub fn heading(&self) -> String {
        self.heading
            .clone()
            .unwrap_or_else(|| self.kind.to_string())
    }
}

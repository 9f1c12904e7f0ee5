//! Yearly crime rate table.

use std::io::Read;

use baseline_spi::{Observation, Result, SeriesLoader, TimeSeries};
use tracing::info;

use crate::columns::{cell, column_index, csv_error, csv_reader, line_of, parse_value, parse_year};

pub const CRIME_RATE_COLUMN: &str = "total incidents of all crime per 100k people";

/// Loads `year` and the total incidents per 100k people.
#[derive(Debug, Clone)]
pub struct CrimeLoader {
    period_column: String,
    value_column: String,
}

impl CrimeLoader {
    pub fn new() -> Self {
        Self {
            period_column: "year".to_string(),
            value_column: CRIME_RATE_COLUMN.to_string(),
        }
    }

    pub fn with_value_column(mut self, column: &str) -> Self {
        self.value_column = column.to_string();
        self
    }
}

impl Default for CrimeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesLoader for CrimeLoader {
    fn name(&self) -> &str {
        "crime"
    }

    fn load_from_reader(&self, reader: &mut dyn Read) -> Result<TimeSeries> {
        info!(loader = self.name(), "reading data");

        let mut csv = csv_reader(reader);
        let headers = csv.headers().map_err(csv_error)?.clone();
        let period_idx = column_index(&headers, &self.period_column)?;
        let value_idx = column_index(&headers, &self.value_column)?;

        let mut observations = Vec::new();
        for record in csv.records() {
            let record = record.map_err(csv_error)?;
            let line = line_of(&record);
            let period = parse_year(cell(&record, period_idx, &self.period_column)?, line)?;
            let value = parse_value(cell(&record, value_idx, &self.value_column)?, line)?;
            observations.push(Observation::new(period, value));
        }

        info!(rows = observations.len(), "data read and parsed");
        TimeSeries::new(observations)
    }
}

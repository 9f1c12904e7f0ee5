//! NASA GISTEMP global mean temperature anomaly table.

use std::io::{BufRead, BufReader, Read};

use baseline_spi::{BaselineError, Observation, Result, SeriesLoader, TimeSeries};
use tracing::{debug, info};

use crate::columns::{cell, column_index, csv_error, csv_reader, line_of, parse_value, parse_year};

/// Placeholder GISTEMP writes for years without a full set of months.
const PLACEHOLDER: char = '*';

/// Loads the `Year` / `J-D` (January to December mean) columns.
///
/// The file starts with a one-line title above the header, and the current
/// year's annual mean is `***` until December is published; such rows are
/// dropped.
#[derive(Debug, Clone)]
pub struct GistempLoader {
    period_column: String,
    value_column: String,
    preamble_lines: usize,
}

impl GistempLoader {
    pub fn new() -> Self {
        Self {
            period_column: "Year".to_string(),
            value_column: "J-D".to_string(),
            preamble_lines: 1,
        }
    }

    /// Use another seasonal column, e.g. `D-N` or `JJA`.
    pub fn with_value_column(mut self, column: &str) -> Self {
        self.value_column = column.to_string();
        self
    }
}

impl Default for GistempLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesLoader for GistempLoader {
    fn name(&self) -> &str {
        "gistemp"
    }

    fn load_from_reader(&self, reader: &mut dyn Read) -> Result<TimeSeries> {
        info!(loader = self.name(), "reading data");

        let mut buffered = BufReader::new(reader);
        let mut skipped = String::new();
        for _ in 0..self.preamble_lines {
            skipped.clear();
            if buffered.read_line(&mut skipped)? == 0 {
                return Err(BaselineError::DataFormat(
                    "file ended before the header row".to_string(),
                ));
            }
        }

        let mut csv = csv_reader(buffered);
        let headers = csv.headers().map_err(csv_error)?.clone();
        let period_idx = column_index(&headers, &self.period_column)?;
        let value_idx = column_index(&headers, &self.value_column)?;

        let mut observations = Vec::new();
        let mut dropped = 0usize;
        for record in csv.records() {
            let record = record.map_err(csv_error)?;
            let line = line_of(&record) + self.preamble_lines as u64;
            let raw_value = cell(&record, value_idx, &self.value_column)?;
            if raw_value.contains(PLACEHOLDER) {
                debug!(line, "dropping placeholder row");
                dropped += 1;
                continue;
            }
            let period = parse_year(cell(&record, period_idx, &self.period_column)?, line)?;
            let value = parse_value(raw_value, line)?;
            observations.push(Observation::new(period, value));
        }

        info!(rows = observations.len(), dropped, "data read and parsed");
        TimeSeries::new(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Land-Ocean: Global Means
Year,Jan,Feb,J-D,D-N
2020,1.17,1.24,1.01,1.02
2021,.81,.64,.85,.86
2022,.91,.89,.89,.87
2023,.87,.97,***,1.16
";

    #[test]
    fn test_loads_annual_means_and_drops_placeholders() {
        let series = GistempLoader::new()
            .load_from_reader(&mut SAMPLE.as_bytes())
            .unwrap();
        assert_eq!(series.periods(), vec![2020, 2021, 2022]);
        assert_eq!(series.values(), vec![1.01, 0.85, 0.89]);
    }

    #[test]
    fn test_alternate_value_column() {
        let series = GistempLoader::new()
            .with_value_column("D-N")
            .load_from_reader(&mut SAMPLE.as_bytes())
            .unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series.last().unwrap().value, 1.16);
    }

    #[test]
    fn test_missing_column() {
        let input = "title\nYear,Jan\n2020,1.0\n";
        let err = GistempLoader::new()
            .load_from_reader(&mut input.as_bytes())
            .unwrap_err();
        assert_eq!(
            err,
            BaselineError::MissingColumn {
                column: "J-D".to_string()
            }
        );
    }

    #[test]
    fn test_bad_number_is_data_format_error() {
        let input = "title\nYear,J-D\n2020,warm\n";
        let err = GistempLoader::new()
            .load_from_reader(&mut input.as_bytes())
            .unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_empty_input() {
        let err = GistempLoader::new()
            .load_from_reader(&mut "".as_bytes())
            .unwrap_err();
        assert!(matches!(err, BaselineError::DataFormat(_)));
    }
}

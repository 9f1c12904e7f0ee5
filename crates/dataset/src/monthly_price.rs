//! Monthly house price table, averaged to complete calendar years.

use std::collections::BTreeMap;
use std::io::Read;

use baseline_spi::{Observation, Result, SeriesLoader, TimeSeries};
use tracing::{debug, info};

use crate::columns::{
    cell, column_index, csv_error, csv_reader, line_of, parse_currency, parse_date_year,
};

const MONTHS_PER_YEAR: usize = 12;

/// Loads `month` / `price` rows and reduces them to yearly means.
///
/// Prices may carry currency formatting (`$412,300`). Only years with
/// exactly twelve monthly rows are kept so a partial current year never
/// reaches the baseline.
#[derive(Debug, Clone)]
pub struct MonthlyPriceLoader {
    date_column: String,
    price_column: String,
}

impl MonthlyPriceLoader {
    pub fn new() -> Self {
        Self {
            date_column: "month".to_string(),
            price_column: "price".to_string(),
        }
    }

    pub fn with_columns(date_column: &str, price_column: &str) -> Self {
        Self {
            date_column: date_column.to_string(),
            price_column: price_column.to_string(),
        }
    }
}

impl Default for MonthlyPriceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesLoader for MonthlyPriceLoader {
    fn name(&self) -> &str {
        "monthly_price"
    }

    fn load_from_reader(&self, reader: &mut dyn Read) -> Result<TimeSeries> {
        info!(loader = self.name(), "reading data");

        let mut csv = csv_reader(reader);
        let headers = csv.headers().map_err(csv_error)?.clone();
        let date_idx = column_index(&headers, &self.date_column)?;
        let price_idx = column_index(&headers, &self.price_column)?;

        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for record in csv.records() {
            let record = record.map_err(csv_error)?;
            let line = line_of(&record);
            let year = parse_date_year(cell(&record, date_idx, &self.date_column)?, line)?;
            let price = parse_currency(cell(&record, price_idx, &self.price_column)?, line)?;
            by_year.entry(year).or_default().push(price);
        }

        info!(years = by_year.len(), "calculating yearly averages");

        let mut observations = Vec::with_capacity(by_year.len());
        for (year, prices) in by_year {
            if prices.len() != MONTHS_PER_YEAR {
                debug!(year, months = prices.len(), "dropping incomplete year");
                continue;
            }
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            observations.push(Observation::new(year, mean));
        }

        info!(rows = observations.len(), "data read and parsed");
        TimeSeries::new(observations)
    }
}

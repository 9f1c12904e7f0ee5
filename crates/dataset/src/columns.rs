//! Shared CSV helpers: column lookup and cell parsing.

use std::io::Read;

use baseline_spi::{BaselineError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};

/// Headed CSV reader that trims whitespace around fields.
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

/// Position of a required column.
pub(crate) fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| BaselineError::MissingColumn {
            column: name.to_string(),
        })
}

pub(crate) fn csv_error(err: csv::Error) -> BaselineError {
    BaselineError::DataFormat(format!("failed to read CSV: {}", err))
}

/// 1-based line number of a record, for error messages.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Fetch a cell, treating a short row as malformed.
pub(crate) fn cell<'r>(record: &'r StringRecord, index: usize, column: &str) -> Result<&'r str> {
    record.get(index).ok_or_else(|| {
        BaselineError::DataFormat(format!(
            "line {}: no value for column '{}'",
            line_of(record),
            column
        ))
    })
}

pub(crate) fn parse_year(raw: &str, line: u64) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        BaselineError::DataFormat(format!("line {}: '{}' is not a year", line, raw))
    })
}

pub(crate) fn parse_value(raw: &str, line: u64) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        BaselineError::DataFormat(format!("line {}: '{}' is not a number", line, raw))
    })
}

/// Parse a currency string such as `$1,234.50`.
pub(crate) fn parse_currency(raw: &str, line: u64) -> Result<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    parse_value(&cleaned, line)
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%d %B %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Extract the year from a date cell.
///
/// Accepts full dates, date-times, `YYYY-MM` and `Mon YYYY`/`Month YYYY`.
pub(crate) fn parse_date_year(raw: &str, line: u64) -> Result<i32> {
    let raw = raw.trim();
    let candidates = [
        raw.to_string(),
        format!("{}-01", raw),
        format!("01 {}", raw),
    ];

    for candidate in &candidates {
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
                return Ok(date.year());
            }
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.year());
        }
    }

    Err(BaselineError::DataFormat(format!(
        "line {}: '{}' is not a recognised date",
        line, raw
    )))
}

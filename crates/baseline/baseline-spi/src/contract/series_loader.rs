//! Series loader trait definition.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::model::TimeSeries;

/// Turns a delimited source file into a clean [`TimeSeries`].
///
/// Implementations apply their dataset's preprocessing (currency cleaning,
/// date-to-year extraction, dropping incomplete or placeholder rows) and fail
/// with [`BaselineError::MissingColumn`](crate::BaselineError::MissingColumn)
/// or [`BaselineError::DataFormat`](crate::BaselineError::DataFormat) when
/// the input does not have the expected shape.
pub trait SeriesLoader: Send + Sync {
    /// Loader name.
    fn name(&self) -> &str;

    /// Parse a series from any byte source.
    fn load_from_reader(&self, reader: &mut dyn Read) -> Result<TimeSeries>;

    /// Parse a series from a file on disk.
    fn load_path(&self, path: &Path) -> Result<TimeSeries> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.load_from_reader(&mut reader)
    }
}

//! Baseline analysis error types.

use thiserror::Error;

/// Result type for baseline operations.
pub type Result<T> = std::result::Result<T, BaselineError>;

/// Errors raised while loading, analysing or rendering a dataset.
///
/// Every variant is fatal for the dataset that produced it and never for its
/// siblings. None of them are retried: inputs are static local files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BaselineError {
    /// Malformed input or a series that breaks the ordering/finiteness rules
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// A required input column is absent
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    /// Reading the source failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Least squares fit is undefined because every x value is identical
    #[error("Degenerate trend fit: all {points} x values are identical")]
    DegenerateFit { points: usize },

    /// Too few points reached a stage
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Chart serialization failed
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BaselineError {
    /// True for errors caused by the shape or content of the input file.
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            BaselineError::DataFormat(_) | BaselineError::MissingColumn { .. }
        )
    }
}

impl From<std::io::Error> for BaselineError {
    fn from(err: std::io::Error) -> Self {
        BaselineError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_display() {
        let error = BaselineError::DataFormat("period 2020 appears twice".to_string());
        assert_eq!(
            error.to_string(),
            "Data format error: period 2020 appears twice"
        );
    }

    #[test]
    fn test_missing_column_display() {
        let error = BaselineError::MissingColumn {
            column: "J-D".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required column 'J-D'");
    }

    #[test]
    fn test_degenerate_fit_display() {
        let error = BaselineError::DegenerateFit { points: 3 };
        assert_eq!(
            error.to_string(),
            "Degenerate trend fit: all 3 x values are identical"
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let error = BaselineError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_is_data_format() {
        assert!(BaselineError::DataFormat("x".to_string()).is_data_format());
        assert!(BaselineError::MissingColumn {
            column: "price".to_string()
        }
        .is_data_format());
        assert!(!BaselineError::DegenerateFit { points: 2 }.is_data_format());
        assert!(!BaselineError::Io("gone".to_string()).is_data_format());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: BaselineError = io.into();
        assert_eq!(error, BaselineError::Io("no such file".to_string()));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(BaselineError::Render("bad json".to_string()));
        assert_eq!(error.to_string(), "Render error: bad json");
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BaselineError>();
    }
}

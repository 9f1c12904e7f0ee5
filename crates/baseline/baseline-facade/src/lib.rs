//! Baseline Analysis Facade
//!
//! Unified re-exports for the baseline module.
//!
//! This facade provides a single entry point to all baseline functionality:
//! - Model types, `BaselineError` and collaborator traits from SPI
//! - `DatasetPolicy`, presets and labels from API
//! - Pipeline stages and `run_pipeline` from Core
//!
//! # Example
//!
//! ```rust
//! use baseline_facade::{run_pipeline, DatasetPolicy, Direction, TimeSeries};
//!
//! let series = TimeSeries::from_pairs([(2019, 10.0), (2020, 12.0), (2021, 15.0), (2022, 11.0)])
//!     .unwrap();
//! let output = run_pipeline(&series, &DatasetPolicy::temperature()).unwrap();
//! assert_eq!(output.verdict.direction, Direction::Decrease);
//! ```

// Re-export everything from SPI
pub use baseline_spi::*;

// Re-export everything from API
pub use baseline_api::*;

// Re-export everything from Core
pub use baseline_core::*;

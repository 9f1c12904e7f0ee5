//! Baseline Analysis API
//!
//! Configuration types, presets and builders for the baseline pipeline.

mod dataset;
mod policy;

// Re-export SPI types
pub use baseline_spi::{BaselineError, ChangeVerdict, Direction, Result, Significance, TimeSeries};

pub use dataset::{ChartLabels, DatasetKind};
pub use policy::{
    AxisClampPolicy, BandConvention, DatasetPolicy, DatasetPolicyBuilder, Deviation,
    RegressionAxis, WindowPolicy,
};

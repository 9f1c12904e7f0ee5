//! Baseline Analysis Service Provider Interface
//!
//! Defines the value types, error taxonomy and collaborator traits shared by
//! the baseline pipeline, the dataset loaders and the report renderer.
//!
//! - [`TimeSeries`]: validated, strictly ascending yearly observations
//! - [`SummaryStats`], [`TrendLine`], [`Band`], [`ChangeVerdict`]: pipeline outputs
//! - [`ChartSpec`]: renderer-agnostic description of the composed chart
//! - [`SeriesLoader`], [`ChartRenderer`]: external collaborator contracts
//! - [`BaselineError`]: standardized error type for every stage

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ChartRenderer, SeriesLoader};
pub use error::{BaselineError, Result};
pub use model::{
    Axis, Band, ChangeVerdict, ChartSpec, Direction, Fill, LineDash, Observation, Significance,
    SourceRef, SummaryStats, TimeSeries, Trace, TraceRole, TraceStyle, TrendLine,
};

//! Data models for baseline analysis.
//!
//! This module contains data structures used throughout the pipeline.

mod chart;
mod series;
mod summary;
mod verdict;

pub use chart::{Axis, ChartSpec, Fill, LineDash, SourceRef, Trace, TraceRole, TraceStyle};
pub use series::{Observation, TimeSeries};
pub use summary::{Band, SummaryStats, TrendLine};
pub use verdict::{ChangeVerdict, Direction, Significance};

//! Baseline Analysis Core
//!
//! Implementations of the baseline pipeline stages:
//!
//! - [`summarize`]: mean/std over a reference window
//! - [`fit_trend`]: ordinary least squares trend line
//! - [`build_band`]: ±1 standard deviation envelope
//! - [`classify_change`]: direction and significance of the latest delta
//! - [`compose_chart`]: named series set for the renderer
//! - [`Pipeline`] / [`run_pipeline`]: all of the above in one pass

mod band;
mod classifier;
mod composer;
mod pipeline;
mod summarizer;
mod trend;

pub use band::build_band;
pub use classifier::classify_change;
pub use composer::{compose_chart, y_axis_range, AVERAGE_COLOR, BAND_FILL, DATA_COLOR, TRENDLINE_COLOR};
pub use pipeline::{run_pipeline, Pipeline, PipelineOutput};
pub use summarizer::{reference_window, summarize, summarize_values};
pub use trend::{fit_line, fit_trend, regression_xs, trend_values};

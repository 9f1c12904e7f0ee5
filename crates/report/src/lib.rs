//! Report
//!
//! Turns configured datasets into a static HTML page:
//!
//! - [`ReportConfig`] / [`DatasetConfig`]: TOML page configuration
//! - [`PlotlyRenderer`]: Plotly.js [`ChartRenderer`] implementation
//! - [`ReportBuilder`]: parallel analysis and rendering of every dataset
//! - [`Report`]: the assembled page
//!
//! # Example
//!
//! ```rust,no_run
//! use report::{ReportBuilder, ReportConfig};
//! use std::path::Path;
//!
//! let config = ReportConfig::load(Path::new("datadebunk.toml")).unwrap();
//! let report = ReportBuilder::new().build(&config);
//! report.write_to(&config.output).unwrap();
//! ```

mod builder;
mod config;
mod page;
mod renderer;

pub use baseline_spi::ChartRenderer;
pub use builder::{analyze_dataset, ReportBuilder};
pub use config::{DatasetConfig, ReportConfig};
pub use page::{verdict_sentence, Report, Section, SectionOutcome};
pub use renderer::{standalone_page, PlotlyRenderer, PLOTLY_CDN};

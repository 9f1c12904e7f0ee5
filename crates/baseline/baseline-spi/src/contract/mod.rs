//! Contract definitions for baseline analysis collaborators.
//!
//! This module contains trait definitions that providers must implement.

mod chart_renderer;
mod series_loader;

pub use chart_renderer::ChartRenderer;
pub use series_loader::SeriesLoader;

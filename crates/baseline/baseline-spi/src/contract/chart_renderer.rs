//! Chart renderer trait definition.

use crate::error::Result;
use crate::model::ChartSpec;

/// Turns a composed [`ChartSpec`] into embeddable markup.
pub trait ChartRenderer: Send + Sync {
    /// Renderer name.
    fn name(&self) -> &str;

    /// Render the chart into a fragment bound to `element_id`.
    fn render(&self, element_id: &str, chart: &ChartSpec) -> Result<String>;
}

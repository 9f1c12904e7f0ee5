//! Builds the report from configuration.

use baseline_core::{Pipeline, PipelineOutput};
use baseline_spi::{ChangeVerdict, ChartRenderer, Result};
use dataset::loader_for;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{DatasetConfig, ReportConfig};
use crate::page::{escape_html, verdict_sentence, Report, Section, SectionOutcome};
use crate::renderer::{standalone_page, PlotlyRenderer};

/// Load one dataset and run its pipeline. The chart carries the
/// configured source attribution.
pub fn analyze_dataset(dataset: &DatasetConfig) -> Result<PipelineOutput> {
    let series = loader_for(dataset.kind).load_path(&dataset.path)?;
    let pipeline = Pipeline::new(dataset.effective_policy()).with_labels(dataset.labels());
    let mut output = pipeline.run(&series)?;
    output.chart.source = dataset.source.clone();
    Ok(output)
}

/// Analyzes every configured dataset in parallel and renders each chart.
///
/// A dataset that fails is reported in its own section; the others still
/// render.
pub struct ReportBuilder<R: ChartRenderer = PlotlyRenderer> {
    renderer: R,
}

impl ReportBuilder<PlotlyRenderer> {
    pub fn new() -> Self {
        Self {
            renderer: PlotlyRenderer::new(),
        }
    }
}

impl Default for ReportBuilder<PlotlyRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ChartRenderer> ReportBuilder<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn build(&self, config: &ReportConfig) -> Report {
        info!(
            datasets = config.datasets.len(),
            renderer = self.renderer.name(),
            "building report"
        );

        let sections: Vec<Section> = config
            .datasets
            .par_iter()
            .enumerate()
            .map(|(index, dataset)| self.section(index, dataset))
            .collect();

        let report = Report {
            title: config.title.clone(),
            intro: config.intro.clone(),
            sections,
        };
        info!(failed = report.failed_count(), "report built");
        report
    }

    fn section(&self, index: usize, dataset: &DatasetConfig) -> Section {
        let element_id = format!("chart-{}-{}", index, dataset.kind);
        let outcome = match self.render_dataset(&element_id, dataset) {
            Ok((chart_html, verdict)) => {
                info!(
                    dataset = %dataset.kind,
                    direction = %verdict.direction,
                    significance = %verdict.significance,
                    "chart rendered"
                );
                SectionOutcome::Rendered {
                    chart_html,
                    verdict,
                }
            }
            Err(e) => {
                warn!(
                    dataset = %dataset.kind,
                    path = %dataset.path.display(),
                    error = %e,
                    "chart could not be generated"
                );
                SectionOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        Section {
            kind: dataset.kind,
            heading: dataset.heading(),
            subheading: dataset.subheading.clone(),
            outcome,
        }
    }

    fn render_dataset(
        &self,
        element_id: &str,
        dataset: &DatasetConfig,
    ) -> Result<(String, ChangeVerdict)> {
        let output = analyze_dataset(dataset)?;
        let html = self.renderer.render(element_id, &output.chart)?;
        Ok((html, output.verdict))
    }

    /// Standalone page for a single dataset.
    pub fn render_preview(&self, dataset: &DatasetConfig) -> Result<String> {
        let output = analyze_dataset(dataset)?;
        let element_id = format!("chart-{}", dataset.kind);
        let html = self.renderer.render(&element_id, &output.chart)?;
        let body = format!(
            "<h2>{}</h2>\n{}\n<p class=\"verdict\">{}</p>",
            escape_html(&dataset.heading()),
            html,
            verdict_sentence(&output.verdict)
        );
        Ok(standalone_page(&dataset.heading(), &body))
    }
}

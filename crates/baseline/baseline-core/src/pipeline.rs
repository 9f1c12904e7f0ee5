//! One pass from a clean series to a chart and a verdict.

use baseline_api::{ChartLabels, DatasetKind, DatasetPolicy};
use baseline_spi::{
    Band, BaselineError, ChangeVerdict, ChartSpec, Result, SummaryStats, TimeSeries, TrendLine,
};
use serde::Serialize;
use tracing::debug;

use crate::band::build_band;
use crate::classifier::classify_change;
use crate::composer::compose_chart;
use crate::summarizer::summarize;
use crate::trend::{fit_trend, trend_values};

/// Everything a single pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub stats: SummaryStats,
    pub trend: TrendLine,
    pub band: Band,
    pub verdict: ChangeVerdict,
    pub chart: ChartSpec,
}

/// Policy-driven baseline pipeline. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    policy: DatasetPolicy,
    labels: ChartLabels,
}

impl Pipeline {
    pub fn new(policy: DatasetPolicy) -> Self {
        Self {
            policy,
            labels: ChartLabels::default(),
        }
    }

    /// Pipeline with the preset policy and labels of a dataset.
    pub fn for_kind(kind: DatasetKind) -> Self {
        Self::new(kind.policy()).with_labels(kind.labels())
    }

    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn policy(&self) -> &DatasetPolicy {
        &self.policy
    }

    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    pub fn run(&self, series: &TimeSeries) -> Result<PipelineOutput> {
        if series.len() < 2 {
            return Err(BaselineError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }

        let policy = &self.policy;
        let stats = summarize(series, policy.window, policy.deviation)?;
        let trend = fit_trend(series, policy.regression_axis)?;
        let trendline = trend_values(series, policy.regression_axis, &trend);
        let band = build_band(series, &stats, policy.band);
        let verdict = classify_change(series, stats.std_dev)?;
        let chart = compose_chart(series, &stats, &band, &trendline, policy, &self.labels);

        debug!(
            points = series.len(),
            mean = stats.mean,
            std_dev = stats.std_dev,
            slope = trend.slope,
            direction = %verdict.direction,
            significance = %verdict.significance,
            "pipeline complete"
        );

        Ok(PipelineOutput {
            stats,
            trend,
            band,
            verdict,
            chart,
        })
    }
}

/// Run the pipeline with default labels.
pub fn run_pipeline(series: &TimeSeries, policy: &DatasetPolicy) -> Result<PipelineOutput> {
    Pipeline::new(*policy).run(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_spi::{Direction, Significance, TraceRole};

    #[test]
    fn test_run_temperature_policy() {
        let series =
            TimeSeries::from_pairs([(2019, 10.0), (2020, 12.0), (2021, 15.0), (2022, 11.0)]).unwrap();
        let output = run_pipeline(&series, &DatasetPolicy::temperature()).unwrap();

        assert!((output.stats.mean - 12.333333).abs() < 1e-5);
        assert!((output.stats.std_dev - 2.054805).abs() < 1e-5);
        assert_eq!(output.verdict.direction, Direction::Decrease);
        assert_eq!(output.verdict.significance, Significance::Significant);
        assert_eq!(output.chart.traces.len(), 5);
        assert_eq!(output.band.upper.len(), 4);
    }

    #[test]
    fn test_two_point_series() {
        let series = TimeSeries::from_pairs([(2020, 100.0), (2021, 100.5)]).unwrap();
        let output = run_pipeline(&series, &DatasetPolicy::house_price()).unwrap();
        assert_eq!(output.stats.std_dev, 0.0);
        assert_eq!(output.verdict.direction, Direction::Increase);
        assert_eq!(output.verdict.significance, Significance::Significant);
    }

    #[test]
    fn test_single_point_fails_fast() {
        let series = TimeSeries::from_pairs([(2020, 100.0)]).unwrap();
        let result = run_pipeline(&series, &DatasetPolicy::crime());
        assert_eq!(
            result.unwrap_err(),
            BaselineError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_crime_sample_deviation_needs_two_window_points() {
        // ExcludeLast over two points leaves a one-point window.
        let policy = DatasetPolicy::builder()
            .deviation(baseline_api::Deviation::Sample)
            .build();
        let series = TimeSeries::from_pairs([(2020, 1.0), (2021, 2.0)]).unwrap();
        assert!(matches!(
            run_pipeline(&series, &policy),
            Err(BaselineError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_for_kind_uses_labels() {
        let series = TimeSeries::from_pairs([(2020, 3.0), (2021, 4.0), (2022, 5.0)]).unwrap();
        let output = Pipeline::for_kind(DatasetKind::Crime).run(&series).unwrap();
        assert_eq!(output.chart.y_axis.title, "Incidents of Crime per 100k People");
        let data = output.chart.trace(TraceRole::Data).unwrap();
        assert_eq!(data.y, vec![3.0, 4.0, 5.0]);
    }
}

//! Assembles the named series set handed to the renderer.

use baseline_api::{AxisClampPolicy, ChartLabels, DatasetPolicy};
use baseline_spi::{
    Axis, Band, ChartSpec, LineDash, SummaryStats, TimeSeries, Trace, TraceRole, TraceStyle,
};

pub const DATA_COLOR: &str = "royalblue";
pub const AVERAGE_COLOR: &str = "red";
pub const TRENDLINE_COLOR: &str = "green";
pub const BAND_FILL: &str = "rgba(225, 100, 100, 0.2)";

/// Y-axis range for the policy, if any.
pub fn y_axis_range(
    series: &TimeSeries,
    stats: &SummaryStats,
    clamp: AxisClampPolicy,
) -> Option<(f64, f64)> {
    match clamp {
        AxisClampPolicy::Unconstrained => None,
        AxisClampPolicy::ZeroToPeakPlusDeviation => series
            .max_value()
            .map(|peak| (0.0, peak + stats.std_dev)),
    }
}

/// Build the chart: data, average, hidden upper band, shaded lower band,
/// trendline. The lower band fills towards the upper one, so their order
/// matters.
pub fn compose_chart(
    series: &TimeSeries,
    stats: &SummaryStats,
    band: &Band,
    trendline: &[f64],
    policy: &DatasetPolicy,
    labels: &ChartLabels,
) -> ChartSpec {
    let x = series.periods();
    let trace = |name: &str, role: TraceRole, y: Vec<f64>, style: TraceStyle, show_legend| Trace {
        name: name.to_string(),
        role,
        x: x.clone(),
        y,
        style,
        show_legend,
    };

    let traces = vec![
        trace(
            "Data",
            TraceRole::Data,
            series.values(),
            TraceStyle::line(DATA_COLOR, LineDash::Solid),
            true,
        ),
        trace(
            "Average",
            TraceRole::Average,
            vec![stats.mean; series.len()],
            TraceStyle::line(AVERAGE_COLOR, LineDash::Dash),
            true,
        ),
        trace(
            "Upper Bound",
            TraceRole::BandUpper,
            band.upper.clone(),
            TraceStyle::hidden(),
            false,
        ),
        trace(
            "Std. Dev.",
            TraceRole::BandLower,
            band.lower.clone(),
            TraceStyle::hidden().with_fill(BAND_FILL),
            true,
        ),
        trace(
            "Trendline",
            TraceRole::Trendline,
            trendline.to_vec(),
            TraceStyle::line(TRENDLINE_COLOR, LineDash::Dot),
            true,
        ),
    ];

    ChartSpec {
        title: labels.title.clone(),
        traces,
        x_axis: Axis::titled(&labels.x_title),
        y_axis: Axis {
            title: labels.y_title.clone(),
            range: y_axis_range(series, stats, policy.axis_clamp),
        },
        drag_locked: policy.lock_drag,
        source: None,
    }
}

//! Ordinary least squares trend line.

use baseline_api::RegressionAxis;
use baseline_spi::{BaselineError, Result, TimeSeries, TrendLine};

/// Independent variable for every point of the series.
pub fn regression_xs(series: &TimeSeries, axis: RegressionAxis) -> Vec<f64> {
    match axis {
        RegressionAxis::Period => series
            .observations()
            .iter()
            .map(|o| o.period as f64)
            .collect(),
        RegressionAxis::Index => (0..series.len()).map(|i| i as f64).collect(),
    }
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Uses centered sums (`slope = Sxy / Sxx`) so large x values such as years
/// do not lose precision.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<TrendLine> {
    if xs.len() != ys.len() {
        return Err(BaselineError::DataFormat(format!(
            "regression needs one x per y, got {} x and {} y",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(BaselineError::InsufficientData {
            required: 2,
            actual: xs.len(),
        });
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx.abs() < f64::EPSILON {
        return Err(BaselineError::DegenerateFit { points: xs.len() });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Ok(TrendLine::new(slope, intercept))
}

/// Fit the trend over the full series on the given axis.
pub fn fit_trend(series: &TimeSeries, axis: RegressionAxis) -> Result<TrendLine> {
    fit_line(&regression_xs(series, axis), &series.values())
}

/// Trend line evaluated at every point of the series.
pub fn trend_values(series: &TimeSeries, axis: RegressionAxis, line: &TrendLine) -> Vec<f64> {
    regression_xs(series, axis)
        .into_iter()
        .map(|x| line.evaluate(x))
        .collect()
}

//! Baseline mean and standard deviation over a reference window.

use baseline_api::{Deviation, WindowPolicy};
use baseline_spi::{BaselineError, Observation, Result, SummaryStats, TimeSeries};

/// Borrow the points the baseline is computed over.
pub fn reference_window(series: &TimeSeries, policy: WindowPolicy) -> &[Observation] {
    match policy {
        WindowPolicy::FullSeries => series.observations(),
        WindowPolicy::ExcludeLast => series.without_last(),
    }
}

/// Mean and standard deviation of the series' reference window.
pub fn summarize(
    series: &TimeSeries,
    window: WindowPolicy,
    deviation: Deviation,
) -> Result<SummaryStats> {
    let values: Vec<f64> = reference_window(series, window)
        .iter()
        .map(|o| o.value)
        .collect();
    summarize_values(&values, deviation)
}

/// Mean and standard deviation of raw values.
///
/// `Population` divides the squared deviations by N, `Sample` by N - 1. A
/// single value has a population deviation of zero and no sample deviation.
pub fn summarize_values(values: &[f64], deviation: Deviation) -> Result<SummaryStats> {
    let required = match deviation {
        Deviation::Population => 1,
        Deviation::Sample => 2,
    };
    if values.len() < required {
        return Err(BaselineError::InsufficientData {
            required,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let squared: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    let denominator = match deviation {
        Deviation::Population => n,
        Deviation::Sample => n - 1.0,
    };
    let std_dev = (squared / denominator).sqrt();

    Ok(SummaryStats::new(mean, std_dev, values.len()))
}

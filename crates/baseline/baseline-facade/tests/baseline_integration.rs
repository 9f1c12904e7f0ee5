//! Integration tests for the baseline module
//!
//! Exercises the stages together through the facade.

use baseline_facade::{
    build_band, classify_change, fit_line, fit_trend, run_pipeline, summarize, trend_values,
    BandConvention, BaselineError, DatasetPolicy, Deviation, Direction, RegressionAxis,
    Significance, TimeSeries, TraceRole, WindowPolicy,
};

fn scenario() -> TimeSeries {
    TimeSeries::from_pairs([(2019, 10.0), (2020, 12.0), (2021, 15.0), (2022, 11.0)]).unwrap()
}

fn long_series() -> TimeSeries {
    TimeSeries::from_pairs((0..40).map(|i| {
        let t = i as f64;
        (1980 + i, 50.0 + t * 0.8 + (t * 0.7).sin() * 4.0)
    }))
    .unwrap()
}

#[test]
fn test_exclude_last_scenario() {
    let series = scenario();
    let stats = summarize(&series, WindowPolicy::ExcludeLast, Deviation::Population).unwrap();
    assert!((stats.mean - 12.333).abs() < 1e-3);
    assert!((stats.std_dev - 2.055).abs() < 1e-3);

    let verdict = classify_change(&series, stats.std_dev).unwrap();
    assert_eq!(verdict.delta, -4.0);
    assert_eq!(verdict.direction, Direction::Decrease);
    assert_eq!(verdict.significance, Significance::Significant);
}

#[test]
fn test_two_point_scenario() {
    let series = TimeSeries::from_pairs([(2020, 100.0), (2021, 100.5)]).unwrap();
    let stats = summarize(&series, WindowPolicy::ExcludeLast, Deviation::Population).unwrap();
    assert_eq!(stats.std_dev, 0.0);

    let verdict = classify_change(&series, stats.std_dev).unwrap();
    assert_eq!(verdict.direction, Direction::Increase);
    assert_eq!(verdict.significance, Significance::Significant);
}

#[test]
fn test_boundary_delta_equals_deviation() {
    let series = TimeSeries::from_pairs([(2020, 10.0), (2021, 12.5)]).unwrap();
    let verdict = classify_change(&series, 2.5).unwrap();
    assert_eq!(verdict.significance, Significance::NotSignificant);
}

#[test]
fn test_direction_iff_strictly_greater() {
    for (prev, last) in [(1.0, 2.0), (2.0, 1.0), (3.0, 3.0), (-1.0, -0.5)] {
        let series = TimeSeries::from_pairs([(2000, prev), (2001, last)]).unwrap();
        let verdict = classify_change(&series, 10.0).unwrap();
        assert_eq!(verdict.direction == Direction::Increase, last > prev);
    }
}

#[test]
fn test_significance_iff_delta_exceeds_deviation() {
    let series = long_series();
    let values = series.values();
    let delta = (values[values.len() - 1] - values[values.len() - 2]).abs();
    for std_dev in [0.0, delta / 2.0, delta, delta * 2.0] {
        let verdict = classify_change(&series, std_dev).unwrap();
        assert_eq!(verdict.significance.is_significant(), delta > std_dev);
    }
}

#[test]
fn test_constant_band_contains_mean() {
    let series = long_series();
    let stats = summarize(&series, WindowPolicy::ExcludeLast, Deviation::Population).unwrap();
    let band = build_band(&series, &stats, BandConvention::Constant);
    for i in 0..series.len() {
        assert!(band.lower[i] <= stats.mean);
        assert!(stats.mean <= band.upper[i]);
    }
}

#[test]
fn test_per_point_band_contains_values() {
    let series = long_series();
    let stats = summarize(&series, WindowPolicy::FullSeries, Deviation::Sample).unwrap();
    let band = build_band(&series, &stats, BandConvention::PerPoint);
    for (i, value) in series.values().into_iter().enumerate() {
        assert!(band.lower[i] <= value && value <= band.upper[i]);
    }
}

#[test]
fn test_trendline_is_linear() {
    let series = long_series();
    let line = fit_trend(&series, RegressionAxis::Period).unwrap();
    let trend = trend_values(&series, RegressionAxis::Period, &line);
    let periods = series.periods();

    for (i, j) in [(0, 1), (3, 17), (5, 39), (20, 21)] {
        let rate = (trend[j] - trend[i]) / (periods[j] - periods[i]) as f64;
        assert!((rate - line.slope).abs() < 1e-9);
    }
}

#[test]
fn test_degenerate_fit_is_an_error_not_nan() {
    let result = fit_line(&[7.0, 7.0], &[1.0, 2.0]);
    assert!(matches!(result, Err(BaselineError::DegenerateFit { points: 2 })));
}

#[test]
fn test_pipeline_presets_differ_only_where_configured() {
    let series = long_series();
    let temperature = run_pipeline(&series, &DatasetPolicy::temperature()).unwrap();
    let price = run_pipeline(&series, &DatasetPolicy::house_price()).unwrap();
    let crime = run_pipeline(&series, &DatasetPolicy::crime()).unwrap();

    // Same window and deviation.
    assert_eq!(temperature.stats, price.stats);
    // Same slope on either regression axis, trendline values identical.
    assert!((temperature.trend.slope - price.trend.slope).abs() < 1e-9);
    let t = temperature.chart.trace(TraceRole::Trendline).unwrap();
    let p = price.chart.trace(TraceRole::Trendline).unwrap();
    for (a, b) in t.y.iter().zip(&p.y) {
        assert!((a - b).abs() < 1e-6);
    }
    // Only the clamped presets carry a y range.
    assert!(temperature.chart.y_axis.range.is_none());
    assert!(price.chart.y_axis.range.is_some());
    // Crime uses the whole series and a sample deviation.
    assert_eq!(crime.stats.window_len, series.len());
    assert_eq!(temperature.stats.window_len, series.len() - 1);
}

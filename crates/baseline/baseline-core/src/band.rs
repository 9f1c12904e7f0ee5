//! One standard deviation envelope.

use baseline_api::BandConvention;
use baseline_spi::{Band, SummaryStats, TimeSeries};

/// Upper and lower boundary series, one entry per observation.
pub fn build_band(series: &TimeSeries, stats: &SummaryStats, convention: BandConvention) -> Band {
    let centers: Vec<f64> = match convention {
        BandConvention::Constant => vec![stats.mean; series.len()],
        BandConvention::PerPoint => series.values(),
    };

    Band {
        upper: centers.iter().map(|c| c + stats.std_dev).collect(),
        lower: centers.iter().map(|c| c - stats.std_dev).collect(),
    }
}

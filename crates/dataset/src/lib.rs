//! Dataset loaders
//!
//! Reads the published source files into clean [`TimeSeries`] values:
//!
//! - [`GistempLoader`]: NASA GISTEMP annual temperature anomalies
//! - [`MonthlyPriceLoader`]: monthly house prices averaged per full year
//! - [`CrimeLoader`]: yearly crime incidents per 100k people

mod columns;
mod crime;
mod gistemp;
mod monthly_price;

pub use baseline_spi::{SeriesLoader, TimeSeries};
pub use crime::{CrimeLoader, CRIME_RATE_COLUMN};
pub use gistemp::GistempLoader;
pub use monthly_price::MonthlyPriceLoader;

use baseline_api::DatasetKind;

/// Loader for a dataset's source format.
pub fn loader_for(kind: DatasetKind) -> Box<dyn SeriesLoader> {
    match kind {
        DatasetKind::Temperature => Box::new(GistempLoader::new()),
        DatasetKind::HousePrice => Box::new(MonthlyPriceLoader::new()),
        DatasetKind::Crime => Box::new(CrimeLoader::new()),
    }
}

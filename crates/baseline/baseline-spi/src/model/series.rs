//! Yearly time series.

use serde::{Deserialize, Serialize};

use crate::error::{BaselineError, Result};

/// A single `(period, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar year
    pub period: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(period: i32, value: f64) -> Self {
        Self { period, value }
    }
}

/// Ordered sequence of observations with unique, strictly ascending periods
/// and finite values.
///
/// Length is not restricted here. Each stage that needs a minimum number of
/// points checks it and fails with [`BaselineError::InsufficientData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Validate and wrap a list of observations.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        for obs in &observations {
            if !obs.value.is_finite() {
                return Err(BaselineError::DataFormat(format!(
                    "value for period {} is not finite",
                    obs.period
                )));
            }
        }
        for pair in observations.windows(2) {
            if pair[1].period <= pair[0].period {
                return Err(BaselineError::DataFormat(format!(
                    "periods must be strictly ascending, found {} after {}",
                    pair[1].period, pair[0].period
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Build from `(period, value)` tuples.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(period, value)| Observation::new(period, value))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Every observation but the most recent one.
    pub fn without_last(&self) -> &[Observation] {
        match self.observations.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn periods(&self) -> Vec<i32> {
        self.observations.iter().map(|o| o.period).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Largest value, `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.observations
            .iter()
            .map(|o| o.value)
            .reduce(f64::max)
    }
}

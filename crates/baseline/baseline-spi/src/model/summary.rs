//! Derived statistics: baseline, trend and band.

use serde::{Deserialize, Serialize};

/// Mean and standard deviation over a reference window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std_dev: f64,
    /// Number of observations the statistics were computed over.
    pub window_len: usize,
}

impl SummaryStats {
    pub fn new(mean: f64, std_dev: f64, window_len: usize) -> Self {
        Self {
            mean,
            std_dev,
            window_len,
        }
    }
}

/// Fitted line `value = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Value of the line at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Upper and lower envelope aligned with the series it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl Band {
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_line_evaluate() {
        let line = TrendLine::new(2.0, -1.0);
        assert_eq!(line.evaluate(0.0), -1.0);
        assert_eq!(line.evaluate(3.0), 5.0);
    }

    #[test]
    fn test_band_len() {
        let band = Band {
            upper: vec![2.0, 3.0],
            lower: vec![0.0, 1.0],
        };
        assert_eq!(band.len(), 2);
        assert!(!band.is_empty());
    }
}

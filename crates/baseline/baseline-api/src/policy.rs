//! Per-dataset pipeline policy.
//!
//! The three published datasets differ in how the baseline window, the
//! deviation, the band, the y-axis range and the regression axis are chosen.
//! Each of those choices is an explicit option here, and the observed
//! combinations are available as named presets.

use serde::{Deserialize, Serialize};

// ============================================================================
// Policy Components
// ============================================================================

/// Which points the baseline mean/std is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Every point.
    FullSeries,
    /// Every point except the most recent one.
    ExcludeLast,
}

/// Standard deviation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deviation {
    /// Divide by N.
    Population,
    /// Divide by N - 1.
    Sample,
}

/// How the shaded envelope is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandConvention {
    /// `mean ± std`, identical at every period.
    Constant,
    /// `value[i] ± std`, following the data.
    PerPoint,
}

/// Y-axis range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisClampPolicy {
    /// Leave the range to the renderer.
    Unconstrained,
    /// `[0, max(value) + std]`.
    ZeroToPeakPlusDeviation,
}

/// Independent variable of the trend regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionAxis {
    /// The period (year) itself.
    Period,
    /// Zero-based row position.
    Index,
}

// ============================================================================
// Dataset Policy
// ============================================================================

/// Complete set of per-dataset choices driving one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPolicy {
    pub window: WindowPolicy,
    pub deviation: Deviation,
    pub band: BandConvention,
    pub axis_clamp: AxisClampPolicy,
    pub regression_axis: RegressionAxis,
    /// Disable interactive dragging on the rendered chart.
    #[serde(default)]
    pub lock_drag: bool,
}

impl DatasetPolicy {
    /// Global temperature anomaly (NASA GISTEMP).
    pub fn temperature() -> Self {
        Self {
            window: WindowPolicy::ExcludeLast,
            deviation: Deviation::Population,
            band: BandConvention::Constant,
            axis_clamp: AxisClampPolicy::Unconstrained,
            regression_axis: RegressionAxis::Period,
            lock_drag: false,
        }
    }

    /// Inflation-adjusted yearly average house price.
    pub fn house_price() -> Self {
        Self {
            window: WindowPolicy::ExcludeLast,
            deviation: Deviation::Population,
            band: BandConvention::Constant,
            axis_clamp: AxisClampPolicy::ZeroToPeakPlusDeviation,
            regression_axis: RegressionAxis::Index,
            lock_drag: true,
        }
    }

    /// Total crime incidents per 100k people.
    pub fn crime() -> Self {
        Self {
            window: WindowPolicy::FullSeries,
            deviation: Deviation::Sample,
            band: BandConvention::PerPoint,
            axis_clamp: AxisClampPolicy::ZeroToPeakPlusDeviation,
            regression_axis: RegressionAxis::Period,
            lock_drag: true,
        }
    }

    pub fn builder() -> DatasetPolicyBuilder {
        DatasetPolicyBuilder::new()
    }
}

impl Default for DatasetPolicy {
    fn default() -> Self {
        Self::temperature()
    }
}

/// Builder for [`DatasetPolicy`], starting from the temperature preset.
#[derive(Debug, Clone, Default)]
pub struct DatasetPolicyBuilder {
    policy: DatasetPolicy,
}

impl DatasetPolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing policy.
    pub fn from_policy(policy: DatasetPolicy) -> Self {
        Self { policy }
    }

    pub fn window(mut self, window: WindowPolicy) -> Self {
        self.policy.window = window;
        self
    }

    pub fn deviation(mut self, deviation: Deviation) -> Self {
        self.policy.deviation = deviation;
        self
    }

    pub fn band(mut self, band: BandConvention) -> Self {
        self.policy.band = band;
        self
    }

    pub fn axis_clamp(mut self, axis_clamp: AxisClampPolicy) -> Self {
        self.policy.axis_clamp = axis_clamp;
        self
    }

    pub fn regression_axis(mut self, regression_axis: RegressionAxis) -> Self {
        self.policy.regression_axis = regression_axis;
        self
    }

    pub fn lock_drag(mut self, lock_drag: bool) -> Self {
        self.policy.lock_drag = lock_drag;
        self
    }

    pub fn build(self) -> DatasetPolicy {
        self.policy
    }
}

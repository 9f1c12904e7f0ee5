//! Renderer-agnostic chart description.
//!
//! The pipeline decides what is drawn (values, labels, styling intent); a
//! [`ChartRenderer`](crate::ChartRenderer) decides how.

use serde::{Deserialize, Serialize};

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dash,
    Dot,
}

impl LineDash {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineDash::Solid => "solid",
            LineDash::Dash => "dash",
            LineDash::Dot => "dot",
        }
    }
}

/// Shade the area between this trace and the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: String,
}

/// Styling intent for a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    pub color: Option<String>,
    pub dash: LineDash,
    /// Line width; `Some(0.0)` hides the line.
    pub width: Option<f64>,
    pub fill: Option<Fill>,
}

impl TraceStyle {
    pub fn line(color: &str, dash: LineDash) -> Self {
        Self {
            color: Some(color.to_string()),
            dash,
            width: None,
            fill: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            color: None,
            dash: LineDash::Solid,
            width: Some(0.0),
            fill: None,
        }
    }

    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill = Some(Fill {
            color: color.to_string(),
        });
        self
    }
}

/// What a trace represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceRole {
    Data,
    Average,
    BandUpper,
    BandLower,
    Trendline,
}

/// One named series of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub role: TraceRole,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub style: TraceStyle,
    pub show_legend: bool,
}

/// Axis title and optional fixed range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub range: Option<(f64, f64)>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
        }
    }
}

/// Attribution shown under a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub label: String,
    pub url: String,
}

/// Complete chart handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub traces: Vec<Trace>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Disable pan/zoom dragging in interactive renderers.
    pub drag_locked: bool,
    pub source: Option<SourceRef>,
}

impl ChartSpec {
    /// First trace with the given role.
    pub fn trace(&self, role: TraceRole) -> Option<&Trace> {
        self.traces.iter().find(|t| t.role == role)
    }
}

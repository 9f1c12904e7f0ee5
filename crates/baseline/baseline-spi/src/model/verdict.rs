//! Latest-change verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of the latest change. A zero delta counts as a decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the latest change exceeds one standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Significant => "significant",
            Significance::NotSignificant => "not significant",
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Significance::Significant)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of the most recent delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeVerdict {
    pub direction: Direction,
    pub significance: Significance,
    /// `last - second_to_last`
    pub delta: f64,
}

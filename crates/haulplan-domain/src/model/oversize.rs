//! Over-dimensional cargo (ODC) limits

use serde::{Deserialize, Serialize};

/// Regulatory per-unit thresholds above which special permits apply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OversizeLimits {
    /// meters
    pub max_length: f64,
    /// meters
    pub max_width: f64,
    /// meters
    pub max_height: f64,
    /// tonnes
    pub max_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Width,
    Height,
    Weight,
}

impl Dimension {
    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Weight => "t",
            _ => "m",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Length => write!(f, "Length"),
            Dimension::Width => write!(f, "Width"),
            Dimension::Height => write!(f, "Height"),
            Dimension::Weight => write!(f, "Weight"),
        }
    }
}

/// One dimension of a unit that is over its regulatory limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OversizeExceedance {
    pub dimension: Dimension,
    pub actual: f64,
    pub limit: f64,
}

impl OversizeExceedance {
    pub fn excess(&self) -> f64 {
        self.actual - self.limit
    }
}

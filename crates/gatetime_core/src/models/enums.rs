//! Core enums used throughout the calculator.

use serde::{Deserialize, Serialize};

/// How the compression percentage is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    /// Percentage entered directly.
    Manual,
    /// Percentage derived from injection pressure and resin coefficient.
    #[default]
    #[serde(rename = "auto")]
    AutoFromPressure,
}

impl std::fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionMode::Manual => write!(f, "manual"),
            CompressionMode::AutoFromPressure => write!(f, "auto"),
        }
    }
}

/// Resin grades with a known pressure-to-compression coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resin {
    #[default]
    #[serde(rename = "PC+ABS")]
    PcAbs,
    #[serde(rename = "ABS")]
    Abs,
    #[serde(rename = "HIPS")]
    Hips,
}

impl Resin {
    /// Compression percent per bar of injection pressure.
    pub fn coefficient(&self) -> f64 {
        match self {
            Resin::PcAbs => 0.0060,
            Resin::Abs => 0.0065,
            Resin::Hips => 0.0075,
        }
    }

    /// Get the display name for this resin.
    pub fn label(&self) -> &'static str {
        match self {
            Resin::PcAbs => "PC+ABS (ED18)",
            Resin::Abs => "ABS (General)",
            Resin::Hips => "HIPS (High Impact PS)",
        }
    }
}

impl std::fmt::Display for Resin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Behavior for screw positions outside `[vp_position, start_position]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Extend the boundary segment's linear rate past the travel range.
    #[default]
    Extrapolate,
    /// Reject positions outside the travel range.
    Strict,
}

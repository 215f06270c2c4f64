//! Compression (resin compressibility) settings.

use serde::{Deserialize, Serialize};

use super::enums::CompressionMode;

/// Upper bound for the compression percentage, manual or derived.
pub const MAX_COMPRESSION_PERCENT: f64 = 20.0;

/// Inputs that determine the compression correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionSetting {
    /// Which of the fields below is used.
    pub mode: CompressionMode,
    /// Percentage used in manual mode, expected in `[0, 20]`.
    pub manual_percent: f64,
    /// Injection pressure in bar, used in auto mode.
    pub injection_pressure_bar: f64,
    /// Percent per bar for the selected resin, used in auto mode.
    pub resin_coefficient: f64,
}

impl CompressionSetting {
    /// Manual compression percentage.
    pub fn manual(percent: f64) -> Self {
        Self {
            mode: CompressionMode::Manual,
            manual_percent: percent,
            injection_pressure_bar: 0.0,
            resin_coefficient: 0.0,
        }
    }

    /// Compression derived from injection pressure.
    pub fn auto(injection_pressure_bar: f64, resin_coefficient: f64) -> Self {
        Self {
            mode: CompressionMode::AutoFromPressure,
            manual_percent: 0.0,
            injection_pressure_bar,
            resin_coefficient,
        }
    }

    /// No correction at all.
    pub fn none() -> Self {
        Self::manual(0.0)
    }
}

impl Default for CompressionSetting {
    fn default() -> Self {
        Self::manual(0.0)
    }
}

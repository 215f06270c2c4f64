//! Compression percentage and factor.
//!
//! ```text
//! manual:  percent = clamp(manual_percent, 0, 20)
//! auto:    percent = clamp(pressure * coefficient, 0, 20)
//! factor = 1 + percent / 100
//! ```

use crate::models::{CompressionMode, CompressionSetting, MAX_COMPRESSION_PERCENT};

/// Effective compression percentage in `[0, 20]`.
///
/// Negative results (negative pressure or percentage) clamp to 0; NaN is
/// treated as 0.
pub fn compression_percent(setting: &CompressionSetting) -> f64 {
    let raw = match setting.mode {
        CompressionMode::Manual => setting.manual_percent,
        CompressionMode::AutoFromPressure => {
            setting.injection_pressure_bar * setting.resin_coefficient
        }
    };

    if raw.is_nan() || raw < 0.0 {
        tracing::warn!(
            "Compression percent {} ({} mode) is below 0, using 0",
            raw,
            setting.mode
        );
        return 0.0;
    }

    if raw > MAX_COMPRESSION_PERCENT {
        tracing::debug!(
            "Compression percent {:.2} capped at {}",
            raw,
            MAX_COMPRESSION_PERCENT
        );
    }
    raw.min(MAX_COMPRESSION_PERCENT)
}

/// Multiplier applied to theoretical time: `1 + percent / 100`.
pub fn compression_factor(setting: &CompressionSetting) -> f64 {
    1.0 + compression_percent(setting) / 100.0
}

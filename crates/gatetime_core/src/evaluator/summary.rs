//! Total time summary for a validated profile.

use serde::Serialize;

use super::compression::{compression_factor, compression_percent};
use crate::models::CompressionSetting;
use crate::profile::{SegmentTiming, ValidProfile};

/// Totals shown next to the profile chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSummary {
    pub step_count: usize,
    /// Start to V/P travel time without correction.
    pub theoretical_s: f64,
    /// Start to V/P travel time including the compression delay.
    pub corrected_s: f64,
    /// `corrected_s - theoretical_s`.
    pub compression_delay_s: f64,
    pub compression_percent: f64,
    pub compression_factor: f64,
}

impl TimeSummary {
    pub fn new(
        profile: &ValidProfile,
        timing: &SegmentTiming,
        compression: &CompressionSetting,
    ) -> Self {
        let percent = compression_percent(compression);
        let factor = compression_factor(compression);
        let theoretical = timing.total();
        let corrected = theoretical * factor;

        Self {
            step_count: profile.step_count(),
            theoretical_s: theoretical,
            corrected_s: corrected,
            compression_delay_s: corrected - theoretical,
            compression_percent: percent,
            compression_factor: factor,
        }
    }
}

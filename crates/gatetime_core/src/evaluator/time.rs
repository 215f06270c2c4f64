//! Position-to-time lookup.
//!
//! The containing segment is the first one, scanning from the start
//! position toward V/P, whose exit position is at or below the queried
//! position. Positions above the start position therefore use the first
//! segment's rate, and positions below V/P use the last segment's rate.

use super::error::{EvalError, EvalResult};
use crate::models::RangePolicy;
use crate::profile::{SegmentTiming, ValidProfile};

/// Theoretical (uncorrected) time at which the screw reaches `position`.
///
/// Extrapolates linearly outside `[vp_position, start_position]`.
/// `timing` must come from `compute_segment_timing(profile)`; a timing
/// with fewer segments falls back to its total for the missing entries.
pub fn theoretical_time_at_position(
    position: f64,
    profile: &ValidProfile,
    timing: &SegmentTiming,
) -> f64 {
    let segments = profile.segments();
    let index = segments
        .iter()
        .position(|segment| segment.exit_position <= position)
        .unwrap_or(segments.len() - 1);
    let segment = &segments[index];
    let before = timing
        .cumulative_before()
        .get(index)
        .copied()
        .unwrap_or_else(|| timing.total());

    before + (segment.entry_position - position) / segment.speed
}

/// Compression-corrected time at which the screw reaches `position`.
pub fn time_at_position(
    position: f64,
    profile: &ValidProfile,
    timing: &SegmentTiming,
    compression_factor: f64,
) -> f64 {
    theoretical_time_at_position(position, profile, timing) * compression_factor
}

/// Query context bundling a valid profile, its timing and the correction.
///
/// Cheap to construct; holds borrows only. Every query is pure.
#[derive(Debug, Clone, Copy)]
pub struct TimeEvaluator<'a> {
    profile: &'a ValidProfile,
    timing: &'a SegmentTiming,
    compression_factor: f64,
    range_policy: RangePolicy,
}

impl<'a> TimeEvaluator<'a> {
    /// Create an evaluator with the default (extrapolating) range policy.
    pub fn new(
        profile: &'a ValidProfile,
        timing: &'a SegmentTiming,
        compression_factor: f64,
    ) -> Self {
        Self {
            profile,
            timing,
            compression_factor,
            range_policy: RangePolicy::default(),
        }
    }

    /// Set the policy for positions outside the travel range.
    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    pub fn profile(&self) -> &ValidProfile {
        self.profile
    }

    pub fn timing(&self) -> &SegmentTiming {
        self.timing
    }

    pub fn compression_factor(&self) -> f64 {
        self.compression_factor
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    /// Theoretical time at `position`.
    pub fn theoretical_time(&self, position: f64) -> EvalResult<f64> {
        self.check_range(position)?;
        Ok(theoretical_time_at_position(
            position,
            self.profile,
            self.timing,
        ))
    }

    /// Compression-corrected time at `position`.
    pub fn corrected_time(&self, position: f64) -> EvalResult<f64> {
        self.check_range(position)?;
        Ok(time_at_position(
            position,
            self.profile,
            self.timing,
            self.compression_factor,
        ))
    }

    /// Corrected time from start to V/P.
    pub fn total_corrected_time(&self) -> f64 {
        self.timing.total() * self.compression_factor
    }

    fn check_range(&self, position: f64) -> EvalResult<()> {
        match self.range_policy {
            RangePolicy::Extrapolate => Ok(()),
            RangePolicy::Strict if self.profile.contains(position) => Ok(()),
            RangePolicy::Strict => Err(EvalError::PositionOutOfRange {
                position,
                min: self.profile.vp_position(),
                max: self.profile.start_position(),
            }),
        }
    }
}

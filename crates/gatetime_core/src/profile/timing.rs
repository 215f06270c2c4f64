//! Segment timing derived from a valid profile.

use serde::Serialize;

use super::validate::ValidProfile;

/// Theoretical (uncorrected) travel times per segment.
///
/// Pure derived data: recompute it whenever the profile changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentTiming {
    durations: Vec<f64>,
    cumulative_before: Vec<f64>,
    total: f64,
}

impl SegmentTiming {
    /// Theoretical duration of each segment in seconds.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Elapsed theoretical time when the screw enters each segment.
    ///
    /// Entry `i` is the sum of durations `0..i`, so the first entry is 0.
    pub fn cumulative_before(&self) -> &[f64] {
        &self.cumulative_before
    }

    /// Theoretical time from start to V/P.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Compute per-segment durations and running sums, start toward V/P.
pub fn compute_segment_timing(profile: &ValidProfile) -> SegmentTiming {
    let segments = profile.segments();
    let mut durations = Vec::with_capacity(segments.len());
    let mut cumulative_before = Vec::with_capacity(segments.len());
    let mut total = 0.0;

    for segment in segments {
        cumulative_before.push(total);
        let duration = segment.duration();
        durations.push(duration);
        total += duration;
    }

    tracing::debug!(
        "Segment timing: durations={:?}, total={:.4}s",
        durations,
        total
    );

    SegmentTiming {
        durations,
        cumulative_before,
        total,
    }
}

//! Profile error types.

use crate::models::MAX_STEPS;

/// Reasons a velocity profile cannot be timed.
///
/// Step numbers are 1-based, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Step count outside `1..=3`.
    #[error("Unsupported step count {0} (expected 1..={max})", max = MAX_STEPS)]
    UnsupportedStepCount(usize),

    /// Interior step without an end position.
    #[error("Step {step} has no end position")]
    MissingBoundary { step: usize },

    /// Speed of zero, negative, infinite or NaN.
    #[error("Speed of step {step} must be finite and greater than 0 (got {speed})")]
    NonPositiveSpeed { step: usize, speed: f64 },

    /// Segment with zero, negative or non-finite travel distance.
    #[error("Step {step} must travel from a larger to a smaller position (entry {entry}, exit {exit})")]
    DegeneratePositions { step: usize, entry: f64, exit: f64 },
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

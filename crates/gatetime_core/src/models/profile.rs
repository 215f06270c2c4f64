//! Velocity profile as entered by the user.
//!
//! The profile is not validated here; see [`crate::profile::validate`].
//! Positions decrease along the travel direction: the screw starts at
//! `start_position` (end of metering) and the timed profile ends at
//! `vp_position` (velocity/pressure switchover).

use serde::{Deserialize, Serialize};

/// Largest supported number of speed steps.
pub const MAX_STEPS: usize = 3;

/// One constant-speed step of the injection profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSpec {
    /// Screw speed in mm/s.
    pub speed: f64,
    /// Screw position (mm) where this step ends.
    ///
    /// Required for every step but the last, which always ends at the
    /// V/P position. Ignored on the last step.
    #[serde(default)]
    pub end_position: Option<f64>,
}

impl StepSpec {
    /// Create a step ending at the given position.
    pub fn new(speed: f64, end_position: f64) -> Self {
        Self {
            speed,
            end_position: Some(end_position),
        }
    }

    /// Create the final step, which runs to the V/P position.
    pub fn last(speed: f64) -> Self {
        Self {
            speed,
            end_position: None,
        }
    }
}

/// Multi-step injection velocity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityProfile {
    /// Screw position at end of metering (time zero).
    pub start_position: f64,
    /// Screw position at V/P switchover (end of the timed profile).
    pub vp_position: f64,
    /// Steps ordered from the start position toward V/P.
    pub steps: Vec<StepSpec>,
}

impl VelocityProfile {
    /// Create an empty profile spanning `start_position` to `vp_position`.
    ///
    /// Add steps with [`with_step`](Self::with_step) and finish with
    /// [`with_final_step`](Self::with_final_step).
    pub fn new(start_position: f64, vp_position: f64) -> Self {
        Self {
            start_position,
            vp_position,
            steps: Vec::with_capacity(MAX_STEPS),
        }
    }

    /// Single-speed profile running straight to V/P.
    pub fn single_step(start_position: f64, vp_position: f64, speed: f64) -> Self {
        Self::new(start_position, vp_position).with_final_step(speed)
    }

    /// Append an interior step ending at `end_position`.
    pub fn with_step(mut self, speed: f64, end_position: f64) -> Self {
        self.steps.push(StepSpec::new(speed, end_position));
        self
    }

    /// Append the final step (ends at V/P).
    pub fn with_final_step(mut self, speed: f64) -> Self {
        self.steps.push(StepSpec::last(speed));
        self
    }

    /// Number of configured steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Speeds of all steps, start-most first.
    pub fn speeds(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(|s| s.speed)
    }
}

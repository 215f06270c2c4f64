//! Profile validation.
//!
//! Turns the step list into ordered `(entry, exit, speed)` segments and
//! rejects profiles that cannot produce finite, positive travel times.

use serde::Serialize;

use super::error::{ProfileError, ProfileResult};
use crate::models::{VelocityProfile, MAX_STEPS};

/// A constant-speed stretch of screw travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Position where the screw enters this segment (larger value).
    pub entry_position: f64,
    /// Position where the screw leaves this segment (smaller value).
    pub exit_position: f64,
    /// Speed in mm/s.
    pub speed: f64,
}

impl Segment {
    /// Travel distance in mm (always positive for a valid profile).
    pub fn length(&self) -> f64 {
        self.entry_position - self.exit_position
    }

    /// Theoretical time to traverse the whole segment.
    pub fn duration(&self) -> f64 {
        (self.entry_position - self.exit_position) / self.speed
    }
}

/// A profile that passed validation.
///
/// Invariant: `start_position > exit(0) > ... > vp_position` and every
/// speed is positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidProfile {
    start_position: f64,
    vp_position: f64,
    segments: Vec<Segment>,
}

impl ValidProfile {
    /// Segments ordered from the start position toward V/P.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn step_count(&self) -> usize {
        self.segments.len()
    }

    pub fn start_position(&self) -> f64 {
        self.start_position
    }

    pub fn vp_position(&self) -> f64 {
        self.vp_position
    }

    /// Total screw travel from start to V/P in mm.
    pub fn travel(&self) -> f64 {
        self.start_position - self.vp_position
    }

    /// Whether `position` lies inside `[vp_position, start_position]`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.vp_position && position <= self.start_position
    }

    /// Speed of the final segment, nearest V/P.
    pub fn final_speed(&self) -> f64 {
        // Non-empty by construction
        self.segments.last().map(|s| s.speed).unwrap_or_default()
    }
}

/// Validate a profile and build its ordered segment list.
///
/// Checks, in order: step count, speeds of all active steps, presence of
/// interior end positions, then finite and strictly decreasing positions.
pub fn validate(profile: &VelocityProfile) -> ProfileResult<ValidProfile> {
    let step_count = profile.step_count();
    if step_count == 0 || step_count > MAX_STEPS {
        return Err(ProfileError::UnsupportedStepCount(step_count));
    }

    for (index, step) in profile.steps.iter().enumerate() {
        // Also rejects NaN
        if !(step.speed > 0.0 && step.speed.is_finite()) {
            return Err(ProfileError::NonPositiveSpeed {
                step: index + 1,
                speed: step.speed,
            });
        }
    }

    let last = step_count - 1;
    let mut segments = Vec::with_capacity(step_count);
    let mut entry = profile.start_position;

    for (index, step) in profile.steps.iter().enumerate() {
        let exit = if index == last {
            profile.vp_position
        } else {
            step.end_position
                .ok_or(ProfileError::MissingBoundary { step: index + 1 })?
        };

        if !(entry > exit && entry.is_finite() && exit.is_finite()) {
            return Err(ProfileError::DegeneratePositions {
                step: index + 1,
                entry,
                exit,
            });
        }

        segments.push(Segment {
            entry_position: entry,
            exit_position: exit,
            speed: step.speed,
        });
        entry = exit;
    }

    tracing::debug!(
        "Validated {}-step profile: {} mm -> {} mm",
        step_count,
        profile.start_position,
        profile.vp_position
    );

    Ok(ValidProfile {
        start_position: profile.start_position,
        vp_position: profile.vp_position,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_step() -> VelocityProfile {
        VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 100.0)
            .with_step(40.0, 50.0)
            .with_final_step(20.0)
    }

    #[test]
    fn builds_triples_for_each_step_count() {
        let one = validate(&VelocityProfile::single_step(150.0, 20.0, 60.0)).unwrap();
        assert_eq!(
            one.segments(),
            &[Segment {
                entry_position: 150.0,
                exit_position: 20.0,
                speed: 60.0
            }]
        );

        let two = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 80.0)
            .with_final_step(40.0);
        let two = validate(&two).unwrap();
        let triples: Vec<_> = two
            .segments()
            .iter()
            .map(|s| (s.entry_position, s.exit_position, s.speed))
            .collect();
        assert_eq!(triples, vec![(150.0, 80.0, 60.0), (80.0, 20.0, 40.0)]);

        let three = validate(&three_step()).unwrap();
        let triples: Vec<_> = three
            .segments()
            .iter()
            .map(|s| (s.entry_position, s.exit_position, s.speed))
            .collect();
        assert_eq!(
            triples,
            vec![(150.0, 100.0, 60.0), (100.0, 50.0, 40.0), (50.0, 20.0, 20.0)]
        );
        assert_eq!(three.step_count(), 3);
        assert_eq!(three.travel(), 130.0);
        assert_eq!(three.final_speed(), 20.0);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut profile = three_step();
        profile.steps[1].speed = 0.0;
        assert_eq!(
            validate(&profile),
            Err(ProfileError::NonPositiveSpeed { step: 2, speed: 0.0 })
        );

        profile.steps[1].speed = -5.0;
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NonPositiveSpeed { step: 2, .. })
        ));

        profile.steps[1].speed = f64::NAN;
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NonPositiveSpeed { step: 2, .. })
        ));
    }

    #[test]
    fn speed_checked_before_positions() {
        // Degenerate step 1 and zero speed on step 3
        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 160.0)
            .with_step(40.0, 50.0)
            .with_final_step(0.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NonPositiveSpeed { step: 3, .. })
        ));
    }

    #[test]
    fn rejects_degenerate_positions() {
        // Boundary above start
        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 160.0)
            .with_final_step(40.0);
        assert_eq!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions {
                step: 1,
                entry: 150.0,
                exit: 160.0
            })
        );

        // Boundaries out of order
        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 50.0)
            .with_step(40.0, 100.0)
            .with_final_step(20.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 2, .. })
        ));

        // Zero-length last segment
        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 20.0)
            .with_final_step(40.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 2, .. })
        ));

        // V/P above start
        let profile = VelocityProfile::single_step(20.0, 150.0, 60.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 1, .. })
        ));
    }

    #[test]
    fn rejects_infinite_positions() {
        let profile = VelocityProfile::new(f64::INFINITY, 20.0)
            .with_step(60.0, 100.0)
            .with_final_step(20.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 1, .. })
        ));

        let profile = VelocityProfile::new(150.0, f64::NEG_INFINITY)
            .with_step(60.0, 100.0)
            .with_final_step(20.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 2, .. })
        ));

        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 100.0)
            .with_step(40.0, f64::NAN)
            .with_final_step(20.0);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::DegeneratePositions { step: 2, .. })
        ));
    }

    #[test]
    fn rejects_infinite_speed() {
        let profile = VelocityProfile::single_step(150.0, 20.0, f64::INFINITY);
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NonPositiveSpeed { step: 1, .. })
        ));
    }

    #[test]
    fn rejects_bad_step_counts_and_missing_boundaries() {
        let empty = VelocityProfile::new(150.0, 20.0);
        assert_eq!(validate(&empty), Err(ProfileError::UnsupportedStepCount(0)));

        let four = three_step().with_final_step(10.0);
        assert_eq!(validate(&four), Err(ProfileError::UnsupportedStepCount(4)));

        let missing = VelocityProfile::new(150.0, 20.0)
            .with_final_step(60.0)
            .with_final_step(40.0);
        assert_eq!(
            validate(&missing),
            Err(ProfileError::MissingBoundary { step: 1 })
        );
    }

    #[test]
    fn last_step_end_position_is_ignored() {
        let mut profile = three_step();
        profile.steps[2].end_position = Some(999.0);
        let valid = validate(&profile).unwrap();
        assert_eq!(valid.segments()[2].exit_position, 20.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let valid = validate(&three_step()).unwrap();
        assert!(valid.contains(150.0));
        assert!(valid.contains(20.0));
        assert!(!valid.contains(150.1));
        assert!(!valid.contains(19.9));
    }
}

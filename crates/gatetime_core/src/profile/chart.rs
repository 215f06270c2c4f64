//! Plateau points for charting the speed-vs-position step profile.

use serde::Serialize;

use super::validate::ValidProfile;

/// Height of the V/P annotation relative to the final speed.
const VP_LABEL_HEIGHT_RATIO: f64 = 1.2;

/// One vertex of the step plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Screw position in mm.
    pub position: f64,
    /// Speed in mm/s.
    pub speed: f64,
}

/// Marker drawn at the V/P switchover position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VpMarker {
    pub position: f64,
    /// Suggested y-coordinate for the marker label.
    pub label_height: f64,
}

/// Chart data for a validated profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileChart {
    /// Two points per segment (entry, exit), start toward V/P.
    pub points: Vec<ChartPoint>,
    pub vp_marker: VpMarker,
}

/// Build chart points for a validated profile.
pub fn profile_chart(profile: &ValidProfile) -> ProfileChart {
    let points = profile
        .segments()
        .iter()
        .flat_map(|segment| {
            [
                ChartPoint {
                    position: segment.entry_position,
                    speed: segment.speed,
                },
                ChartPoint {
                    position: segment.exit_position,
                    speed: segment.speed,
                },
            ]
        })
        .collect();

    ProfileChart {
        points,
        vp_marker: VpMarker {
            position: profile.vp_position(),
            label_height: profile.final_speed() * VP_LABEL_HEIGHT_RATIO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VelocityProfile;
    use crate::profile::validate;

    #[test]
    fn three_step_plateaus() {
        let profile = VelocityProfile::new(150.0, 20.0)
            .with_step(60.0, 100.0)
            .with_step(40.0, 50.0)
            .with_final_step(20.0);
        let chart = profile_chart(&validate(&profile).unwrap());

        let xy: Vec<_> = chart.points.iter().map(|p| (p.position, p.speed)).collect();
        assert_eq!(
            xy,
            vec![
                (150.0, 60.0),
                (100.0, 60.0),
                (100.0, 40.0),
                (50.0, 40.0),
                (50.0, 20.0),
                (20.0, 20.0),
            ]
        );
        assert_eq!(chart.vp_marker.position, 20.0);
        assert!((chart.vp_marker.label_height - 24.0).abs() < 1e-9);
    }

    #[test]
    fn single_step_plateau() {
        let profile = VelocityProfile::single_step(150.0, 20.0, 60.0);
        let chart = profile_chart(&validate(&profile).unwrap());
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].position, 150.0);
        assert_eq!(chart.points[1].position, 20.0);
    }
}

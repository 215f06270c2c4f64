//! Profile model: validation, segment timing and chart points.
//!
//! A [`VelocityProfile`](crate::models::VelocityProfile) is validated once
//! into a [`ValidProfile`], whose ordered segments drive every later
//! computation. Timing is derived data and is recomputed from the valid
//! profile whenever the configuration changes.
//!
//! # Example
//!
//! ```
//! use gatetime_core::models::VelocityProfile;
//! use gatetime_core::profile::{compute_segment_timing, validate};
//!
//! let profile = VelocityProfile::new(150.0, 20.0)
//!     .with_step(60.0, 100.0)
//!     .with_step(40.0, 50.0)
//!     .with_final_step(20.0);
//!
//! let valid = validate(&profile).unwrap();
//! let timing = compute_segment_timing(&valid);
//! assert_eq!(timing.durations().len(), 3);
//! ```

mod chart;
mod error;
mod timing;
mod validate;

pub use chart::{profile_chart, ChartPoint, ProfileChart, VpMarker};
pub use error::{ProfileError, ProfileResult};
pub use timing::{compute_segment_timing, SegmentTiming};
pub use validate::{validate, Segment, ValidProfile};

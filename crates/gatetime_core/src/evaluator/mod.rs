//! Time evaluator: compression factor and position-to-time lookup.
//!
//! This module provides:
//! - Compression percentage/factor from a manual value or injection pressure
//! - Theoretical and compression-corrected time at any screw position
//! - Total time summary for a validated profile
//!
//! # Example
//!
//! ```
//! use gatetime_core::evaluator::{compression_factor, TimeEvaluator};
//! use gatetime_core::models::{CompressionSetting, VelocityProfile};
//! use gatetime_core::profile::{compute_segment_timing, validate};
//!
//! let profile = VelocityProfile::single_step(150.0, 20.0, 65.0);
//! let valid = validate(&profile).unwrap();
//! let timing = compute_segment_timing(&valid);
//! let factor = compression_factor(&CompressionSetting::manual(10.0));
//!
//! let evaluator = TimeEvaluator::new(&valid, &timing, factor);
//! let t = evaluator.corrected_time(20.0).unwrap();
//! assert!((t - 2.2).abs() < 1e-9);
//! ```

mod compression;
mod error;
mod summary;
mod time;

pub use compression::{compression_factor, compression_percent};
pub use error::{EvalError, EvalResult};
pub use summary::TimeSummary;
pub use time::{theoretical_time_at_position, time_at_position, TimeEvaluator};

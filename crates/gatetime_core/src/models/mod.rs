//! Data models for the gate timing calculator.
//!
//! This module contains the plain input and output structures:
//! - Enums for compression mode, resin type and range policy
//! - The velocity profile as entered (unvalidated)
//! - Compression settings
//! - Gates, the per-request gate sheet and per-gate results

mod compression;
mod enums;
mod gates;
mod profile;

// Re-export all public types
pub use compression::{CompressionSetting, MAX_COMPRESSION_PERCENT};
pub use enums::{CompressionMode, RangePolicy, Resin};
pub use gates::{
    Gate, GateError, GateOutcome, GateResult, GateSheet, GateSheetError, MAX_GATES,
};
pub use profile::{StepSpec, VelocityProfile, MAX_STEPS};

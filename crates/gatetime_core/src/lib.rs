//! Gatetime Core - injection profile timing for mold gates
//!
//! Models a 1-3 step injection velocity profile over a decreasing screw
//! position axis, converts screw positions into compression-corrected
//! elapsed times, and evaluates gate open/close positions in batch.
//!
//! This crate contains all calculation logic with zero UI dependencies.
//! Form handling, chart rendering and table display live in the host
//! application.

pub mod calculator;
pub mod config;
pub mod evaluator;
pub mod export;
pub mod gates;
pub mod logging;
pub mod models;
pub mod profile;

pub use calculator::{evaluate, evaluate_inputs, CalcError, Evaluation};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

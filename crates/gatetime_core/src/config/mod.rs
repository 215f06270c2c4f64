//! Configuration for the gate timing calculator.
//!
//! This module provides:
//! - TOML-based input settings with logical sections
//! - Defaults matching the calculator form for every missing field
//! - Validation on load
//!
//! Settings describe the current input set only; nothing is written back.
//!
//! # Example
//!
//! ```no_run
//! use gatetime_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("gatetime.toml");
//! config.load_or_default().unwrap();
//!
//! println!("Steps: {}", config.settings().profile.step_count);
//! config.settings_mut().compression.injection_pressure_bar = 1200.0;
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    CompressionSettings, EvaluationSettings, GateEntry, GateSettings, LoggingSettings,
    default_step_ends, ProfileSettings, Settings,
};

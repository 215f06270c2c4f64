//! Config manager for loading input settings.
//!
//! Key features:
//! - Load from a TOML file, or fall back to defaults when it is absent
//! - Validation on load
//! - In-memory edits through `settings_mut`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;
use crate::models::GateSheetError;

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid gate configuration: {0}")]
    Gates(#[from] GateSheetError),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Holds the current input settings and where they came from.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_default()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = Settings::from_toml_str(&content)?;
        tracing::debug!("Loaded settings from {}", self.config_path.display());
        Ok(())
    }

    /// Load config from file, using defaults if it doesn't exist.
    ///
    /// The file is never created.
    pub fn load_or_default(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            self.load()
        } else {
            tracing::info!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            self.settings = Settings::default();
            Ok(())
        }
    }
}

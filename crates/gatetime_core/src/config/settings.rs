//! Settings struct with TOML-based sections.
//!
//! Sections map to TOML tables: `[profile]`, `[compression]`,
//! `[evaluation]`, `[gates]` and `[logging]`.

use serde::{Deserialize, Serialize};

use super::manager::{ConfigError, ConfigResult};
use crate::logging::LogLevel;
use crate::models::{
    CompressionMode, CompressionSetting, GateSheet, RangePolicy, Resin, VelocityProfile,
    MAX_GATES, MAX_STEPS,
};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Velocity profile.
    #[serde(default)]
    pub profile: ProfileSettings,

    /// Compression correction.
    #[serde(default)]
    pub compression: CompressionSettings,

    /// Query behavior.
    #[serde(default)]
    pub evaluation: EvaluationSettings,

    /// Gate positions.
    #[serde(default)]
    pub gates: GateSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check structural limits that don't depend on profile geometry.
    ///
    /// Speed and position problems are reported by profile validation at
    /// evaluation time instead.
    pub fn validate(&self) -> ConfigResult<()> {
        let steps = self.profile.step_count;
        if steps == 0 || steps > MAX_STEPS {
            return Err(ConfigError::Invalid(format!(
                "profile.step_count must be 1..={}, got {}",
                MAX_STEPS, steps
            )));
        }

        let count = self.gates.count;
        if count == 0 || count > MAX_GATES {
            return Err(ConfigError::Invalid(format!(
                "gates.count must be 1..={}, got {}",
                MAX_GATES, count
            )));
        }

        if let Some(entry) = self.gates.entries.iter().find(|e| e.id == 0 || e.id > count) {
            return Err(ConfigError::Invalid(format!(
                "gate entry id {} is outside 1..={}",
                entry.id, count
            )));
        }

        Ok(())
    }
}

/// Velocity profile configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Number of speed steps (1-3).
    #[serde(default = "default_step_count")]
    pub step_count: usize,

    /// Screw position at end of metering (mm).
    #[serde(default = "default_start_position")]
    pub start_position: f64,

    /// Screw position at V/P switchover (mm).
    #[serde(default = "default_vp_position")]
    pub vp_position: f64,

    /// Speed per step (mm/s), start-most first.
    #[serde(default = "default_speeds")]
    pub speeds: Vec<f64>,

    /// End position of each step but the last (mm). When absent, the
    /// boundaries for `step_count` come from [`default_step_ends`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_ends: Option<Vec<f64>>,
}

fn default_step_count() -> usize {
    3
}

fn default_start_position() -> f64 {
    150.0
}

fn default_vp_position() -> f64 {
    20.0
}

fn default_speeds() -> Vec<f64> {
    vec![60.0, 40.0, 20.0]
}

/// Interior boundaries used when `step_ends` is not given.
pub fn default_step_ends(step_count: usize) -> Vec<f64> {
    match step_count {
        2 => vec![80.0],
        3 => vec![100.0, 50.0],
        _ => Vec::new(),
    }
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            start_position: default_start_position(),
            vp_position: default_vp_position(),
            speeds: default_speeds(),
            step_ends: None,
        }
    }
}

impl ProfileSettings {
    /// Build the active velocity profile.
    ///
    /// Only the first `step_count` speeds and `step_count - 1` end
    /// positions are used; extra entries are ignored.
    pub fn to_profile(&self) -> ConfigResult<VelocityProfile> {
        let count = self.step_count;
        if self.speeds.len() < count {
            return Err(ConfigError::Invalid(format!(
                "profile.speeds has {} entries, {} steps need {}",
                self.speeds.len(),
                count,
                count
            )));
        }
        let interior = count.saturating_sub(1);
        let step_ends = match &self.step_ends {
            Some(ends) => ends.clone(),
            None => default_step_ends(count),
        };
        if step_ends.len() < interior {
            return Err(ConfigError::Invalid(format!(
                "profile.step_ends has {} entries, {} steps need {}",
                step_ends.len(),
                count,
                interior
            )));
        }

        let mut profile = VelocityProfile::new(self.start_position, self.vp_position);
        for (index, &speed) in self.speeds.iter().take(count).enumerate() {
            profile = match step_ends.get(index) {
                Some(&end) if index < interior => profile.with_step(speed, end),
                _ => profile.with_final_step(speed),
            };
        }
        Ok(profile)
    }
}

/// Compression configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// Manual percentage or derived from pressure.
    #[serde(default)]
    pub mode: CompressionMode,

    /// Percentage used in manual mode.
    #[serde(default = "default_manual_percent")]
    pub manual_percent: f64,

    /// Injection pressure (bar) used in auto mode.
    #[serde(default = "default_injection_pressure")]
    pub injection_pressure_bar: f64,

    /// Resin grade selecting the auto-mode coefficient.
    #[serde(default)]
    pub resin: Resin,

    /// Coefficient override for resins not in the list.
    #[serde(default)]
    pub resin_coefficient: Option<f64>,
}

fn default_manual_percent() -> f64 {
    6.0
}

fn default_injection_pressure() -> f64 {
    1000.0
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            mode: CompressionMode::default(),
            manual_percent: default_manual_percent(),
            injection_pressure_bar: default_injection_pressure(),
            resin: Resin::default(),
            resin_coefficient: None,
        }
    }
}

impl CompressionSettings {
    /// Coefficient in effect: the override if set, else the resin's.
    pub fn coefficient(&self) -> f64 {
        self.resin_coefficient
            .unwrap_or_else(|| self.resin.coefficient())
    }

    /// Build the compression setting for the evaluator.
    pub fn to_setting(&self) -> CompressionSetting {
        CompressionSetting {
            mode: self.mode,
            manual_percent: self.manual_percent,
            injection_pressure_bar: self.injection_pressure_bar,
            resin_coefficient: self.coefficient(),
        }
    }
}

/// Evaluation behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Handling of positions outside the travel range.
    #[serde(default)]
    pub range_policy: RangePolicy,
}

/// Gate sheet configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSettings {
    /// Number of gate rows (30 or 60 in the standard forms).
    #[serde(default = "default_gate_count")]
    pub count: u32,

    /// Gate rows as entered. Rows not listed are empty.
    #[serde(default)]
    pub entries: Vec<GateEntry>,
}

fn default_gate_count() -> u32 {
    MAX_GATES
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            count: default_gate_count(),
            entries: Vec::new(),
        }
    }
}

impl GateSettings {
    /// Build the gate sheet, parsing the free-text fields.
    ///
    /// Later entries for the same id replace earlier ones.
    pub fn to_sheet(&self) -> ConfigResult<GateSheet> {
        let mut sheet = GateSheet::new(self.count)?;
        for entry in &self.entries {
            sheet.set_fields(entry.id, &entry.open, &entry.close)?;
        }
        Ok(sheet)
    }
}

/// One gate row with free-text Open/Close fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateEntry {
    pub id: u32,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl GateEntry {
    pub fn new(id: u32, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            id,
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}

//! Logging setup for the gate timing calculator.
//!
//! Library code logs through `tracing` macros; the host application
//! installs a subscriber once with [`init_tracing`], or with
//! [`init_from_settings`] using the `[logging]` section of the settings.
//!
//! # Example
//!
//! ```no_run
//! use gatetime_core::config::Settings;
//! use gatetime_core::logging::init_from_settings;
//!
//! let settings = Settings::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
//! init_from_settings(&settings.logging);
//! tracing::info!("calculator ready");
//! ```

mod types;

pub use types::LogLevel;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingSettings;

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup; later calls are ignored.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Initialize the global subscriber from the `[logging]` settings section.
pub fn init_from_settings(settings: &LoggingSettings) {
    init_tracing(settings.level);
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

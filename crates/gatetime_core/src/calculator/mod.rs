//! End-to-end evaluation of one input set.
//!
//! Validates the profile, computes segment timing once, and evaluates
//! every gate against it. A profile error suppresses all output: no chart,
//! no totals and no gate table.

use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, Settings};
use crate::evaluator::{TimeEvaluator, TimeSummary};
use crate::export::{self, ExportResult, ResultRow};
use crate::gates::evaluate_gates;
use crate::models::{CompressionSetting, GateResult, GateSheet, RangePolicy, VelocityProfile};
use crate::profile::{compute_segment_timing, profile_chart, validate, ProfileChart, ProfileError};

/// Errors that prevent any output from being produced.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything the display and export side needs for one input set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub summary: TimeSummary,
    pub chart: ProfileChart,
    /// One entry per complete gate, ascending by id.
    pub gates: Vec<GateResult>,
}

impl Evaluation {
    /// Result table rows (timed gates only, 3-decimal values).
    pub fn rows(&self) -> Vec<ResultRow> {
        export::result_rows(&self.gates)
    }

    /// Number of gates flagged with an error.
    pub fn error_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_error()).count()
    }

    /// CSV download payload (with BOM).
    pub fn to_csv_bytes(&self) -> ExportResult<Vec<u8>> {
        export::to_csv_bytes(&self.rows())
    }

    /// Suggested CSV file name for this profile.
    pub fn export_file_name(&self) -> String {
        export::export_file_name(self.summary.step_count)
    }

    /// JSON payload for the display side.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluate the input set described by `settings`.
pub fn evaluate(settings: &Settings) -> Result<Evaluation, CalcError> {
    let profile = settings.profile.to_profile()?;
    let compression = settings.compression.to_setting();
    let sheet = settings.gates.to_sheet()?;

    Ok(evaluate_inputs(
        &profile,
        &compression,
        &sheet,
        settings.evaluation.range_policy,
    )?)
}

/// Evaluate explicit inputs.
pub fn evaluate_inputs(
    profile: &VelocityProfile,
    compression: &CompressionSetting,
    sheet: &GateSheet,
    range_policy: RangePolicy,
) -> Result<Evaluation, ProfileError> {
    let valid = validate(profile)
        .inspect_err(|err| tracing::warn!("Profile rejected, no timing output: {}", err))?;

    let timing = compute_segment_timing(&valid);
    let summary = TimeSummary::new(&valid, &timing, compression);
    let evaluator = TimeEvaluator::new(&valid, &timing, summary.compression_factor)
        .with_range_policy(range_policy);
    let gates = evaluate_gates(sheet, &evaluator);

    tracing::info!(
        "[{}-step] total {:.3}s (theoretical {:.3}s, compression {:.1}%), {} gates",
        summary.step_count,
        summary.corrected_s,
        summary.theoretical_s,
        summary.compression_percent,
        gates.len()
    );

    Ok(Evaluation {
        summary,
        chart: profile_chart(&valid),
        gates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateEntry;
    use crate::logging::init_test_tracing;
    use crate::models::CompressionMode;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_settings_evaluate() {
        init_test_tracing();
        let evaluation = evaluate(&Settings::default()).unwrap();

        // 1000 bar * 0.0060 = 6 %
        assert!(close(evaluation.summary.compression_percent, 6.0));
        assert!(close(evaluation.summary.theoretical_s, 3.583_333_333_3));
        assert!(close(
            evaluation.summary.corrected_s,
            evaluation.summary.theoretical_s * 1.06
        ));
        assert_eq!(evaluation.chart.points.len(), 6);
        assert!(evaluation.gates.is_empty());
        assert_eq!(evaluation.export_file_name(), "results_3step.csv");
    }

    #[test]
    fn gates_flow_into_rows() {
        let mut settings = Settings::default();
        settings.compression.mode = CompressionMode::Manual;
        settings.compression.manual_percent = 0.0;
        settings.gates.count = 30;
        settings.gates.entries = vec![
            GateEntry::new(2, "80", "90"),
            GateEntry::new(1, "150", "30"),
            GateEntry::new(3, "100", ""),
        ];

        let evaluation = evaluate(&settings).unwrap();
        assert_eq!(evaluation.gates.len(), 2);
        assert_eq!(evaluation.error_count(), 1);

        let rows = evaluation.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gate, "G01");
        assert_eq!(rows[0].open_s, 0.0);
        assert_eq!(rows[0].close_s, 3.083);

        let csv = evaluation.to_csv_bytes().unwrap();
        let text = String::from_utf8_lossy(&csv[3..]).to_string();
        assert!(text.starts_with("Gate,Open(s),Close(s)\nG01,0.000,3.083\n"));
    }

    #[test]
    fn invalid_profile_suppresses_output() {
        let mut settings = Settings::default();
        settings.profile.speeds = vec![60.0, 0.0, 20.0];
        settings.gates.entries = vec![GateEntry::new(1, "90", "80")];

        let err = evaluate(&settings).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Profile(ProfileError::NonPositiveSpeed { step: 2, .. })
        ));
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn degenerate_profile_is_rejected() {
        let mut settings = Settings::default();
        settings.profile.step_ends = Some(vec![50.0, 100.0]);
        assert!(matches!(
            evaluate(&settings),
            Err(CalcError::Profile(ProfileError::DegeneratePositions { .. }))
        ));
    }

    #[test]
    fn infinite_start_position_is_rejected() {
        let settings = Settings::from_toml_str("[profile]\nstart_position = inf\n").unwrap();
        assert!(matches!(
            evaluate(&settings),
            Err(CalcError::Profile(ProfileError::DegeneratePositions { step: 1, .. }))
        ));
    }

    #[test]
    fn config_errors_pass_through() {
        let mut settings = Settings::default();
        settings.gates.count = 0;
        assert!(matches!(evaluate(&settings), Err(CalcError::Config(_))));
    }

    #[test]
    fn json_payload_contains_sections() {
        let mut settings = Settings::default();
        settings.gates.entries = vec![GateEntry::new(1, "90", "80")];
        let json = evaluate(&settings).unwrap().to_json().unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"vp_marker\""));
        assert!(json.contains("\"gate_id\": 1"));
    }
}

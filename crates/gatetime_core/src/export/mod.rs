//! Result table rows and CSV export.
//!
//! The CSV file has the header `Gate,Open(s),Close(s)`, one row per gate
//! that produced times (ascending id), values with three decimals, and a
//! UTF-8 byte order mark so spreadsheet tools pick the right encoding.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::models::GateResult;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV header columns.
pub const CSV_HEADER: [&str; 3] = ["Gate", "Open(s)", "Close(s)"];

/// Errors that can occur while exporting results.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write export file: {0}")]
    Io(#[from] io::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub gate_id: u32,
    /// Display label, e.g. `G03`.
    pub gate: String,
    /// Open time in seconds, rounded to 3 decimals.
    pub open_s: f64,
    /// Close time in seconds, rounded to 3 decimals.
    pub close_s: f64,
}

/// Round to 3 decimal places, normalizing `-0.0` to `0.0`.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

/// Table rows for every timed gate, ascending by id. Error rows are skipped.
pub fn result_rows(results: &[GateResult]) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = results
        .iter()
        .filter_map(|result| {
            let (open, close) = result.times()?;
            Some(ResultRow {
                gate_id: result.gate_id,
                gate: result.label(),
                open_s: round3(open),
                close_s: round3(close),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.gate_id);
    rows
}

/// Write rows as CSV (no BOM) to any writer.
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.gate.clone(),
            format!("{:.3}", row.open_s),
            format!("{:.3}", row.close_s),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// CSV download payload: UTF-8 BOM followed by the table.
pub fn to_csv_bytes(rows: &[ResultRow]) -> ExportResult<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    write_csv(rows, &mut buffer)?;
    Ok(buffer)
}

/// Write the CSV download payload to a file.
pub fn write_csv_file(rows: &[ResultRow], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let bytes = to_csv_bytes(rows)?;
    fs::write(path, bytes)?;
    tracing::info!("Exported {} gate rows to {}", rows.len(), path.display());
    Ok(())
}

/// Suggested download file name, e.g. `results_3step.csv`.
pub fn export_file_name(step_count: usize) -> String {
    format!("results_{}step.csv", step_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GateError, GateOutcome};
    use tempfile::tempdir;

    fn timed(gate_id: u32, open_time: f64, close_time: f64) -> GateResult {
        GateResult {
            gate_id,
            outcome: GateOutcome::Timed {
                open_time,
                close_time,
            },
        }
    }

    fn sample_results() -> Vec<GateResult> {
        vec![
            timed(12, 1.25, 2.0),
            timed(3, 0.833_333_3, 3.083_333_3),
            GateResult {
                gate_id: 5,
                outcome: GateOutcome::Error(GateError::InvalidGatePair {
                    open: 80.0,
                    close: 90.0,
                }),
            },
        ]
    }

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round3(0.833_333_3), 0.833);
        assert_eq!(round3(3.083_6), 3.084);
        assert_eq!(round3(-0.000_1).to_string(), "0");
    }

    #[test]
    fn rows_skip_errors_and_sort_by_id() {
        let rows = result_rows(&sample_results());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].gate, "G03");
        assert_eq!(rows[0].open_s, 0.833);
        assert_eq!(rows[0].close_s, 3.083);
        assert_eq!(rows[1].gate, "G12");
    }

    #[test]
    fn csv_has_bom_and_header() {
        let rows = result_rows(&sample_results());
        let bytes = to_csv_bytes(&rows).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Gate,Open(s),Close(s)");
        assert_eq!(lines[1], "G03,0.833,3.083");
        assert_eq!(lines[2], "G12,1.250,2.000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_table_is_header_only() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Gate,Open(s),Close(s)\n");
    }

    #[test]
    fn writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(export_file_name(3));
        let rows = result_rows(&sample_results());

        write_csv_file(&rows, &path).unwrap();

        assert!(path.to_string_lossy().ends_with("results_3step.csv"));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }
}

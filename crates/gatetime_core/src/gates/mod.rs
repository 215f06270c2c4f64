//! Gate batch evaluation.
//!
//! Each gate is evaluated independently: an invalid pair or an
//! out-of-range position marks only that gate's row, and gates missing a
//! position are left out of the results entirely.

use crate::evaluator::TimeEvaluator;
use crate::models::{Gate, GateError, GateOutcome, GateResult, GateSheet};

/// Evaluate a single gate.
///
/// Returns `None` if either position has not been supplied.
pub fn evaluate_gate(gate: &Gate, evaluator: &TimeEvaluator) -> Option<GateResult> {
    let (open, close) = gate.positions()?;

    let outcome = match time_pair(open, close, evaluator) {
        Ok((open_time, close_time)) => GateOutcome::Timed {
            open_time,
            close_time,
        },
        Err(err) => {
            tracing::debug!("{}: {}", gate.label(), err);
            GateOutcome::Error(err)
        }
    };

    Some(GateResult {
        gate_id: gate.id,
        outcome,
    })
}

/// Evaluate every complete gate in the sheet, in ascending id order.
pub fn evaluate_gates(sheet: &GateSheet, evaluator: &TimeEvaluator) -> Vec<GateResult> {
    let results: Vec<GateResult> = sheet
        .iter()
        .filter_map(|gate| evaluate_gate(gate, evaluator))
        .collect();

    tracing::debug!(
        "Evaluated {} of {} gates ({} with errors)",
        results.len(),
        sheet.capacity(),
        results.iter().filter(|r| r.is_error()).count()
    );

    results
}

fn time_pair(open: f64, close: f64, evaluator: &TimeEvaluator) -> Result<(f64, f64), GateError> {
    // Screw position decreases over time, so the gate must open first
    if !(open > close) {
        return Err(GateError::InvalidGatePair { open, close });
    }
    let open_time = evaluator.corrected_time(open)?;
    let close_time = evaluator.corrected_time(close)?;
    Ok((open_time, close_time))
}

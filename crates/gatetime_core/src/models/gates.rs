//! Gate positions and per-gate timing results.

use serde::{Deserialize, Serialize};

/// Largest gate sheet supported.
pub const MAX_GATES: u32 = 60;

/// A mold gate with its open/close screw positions.
///
/// Positions stay `None` until the user supplies a parsable number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gate {
    /// Gate number, starting at 1.
    pub id: u32,
    /// Screw position (mm) where the gate opens.
    pub open_position: Option<f64>,
    /// Screw position (mm) where the gate closes.
    pub close_position: Option<f64>,
}

impl Gate {
    /// Create a gate with both positions set.
    pub fn new(id: u32, open_position: f64, close_position: f64) -> Self {
        Self {
            id,
            open_position: Some(open_position),
            close_position: Some(close_position),
        }
    }

    /// Create a gate from the free-text Open/Close fields.
    ///
    /// Empty or non-numeric text is treated as "not supplied".
    pub fn from_fields(id: u32, open_text: &str, close_text: &str) -> Self {
        Self {
            id,
            open_position: parse_position(id, open_text),
            close_position: parse_position(id, close_text),
        }
    }

    /// Both positions, if both were supplied.
    pub fn positions(&self) -> Option<(f64, f64)> {
        Some((self.open_position?, self.close_position?))
    }

    /// Display label, e.g. `G07`.
    pub fn label(&self) -> String {
        gate_label(self.id)
    }
}

/// Format a gate id as its display label.
pub(crate) fn gate_label(id: u32) -> String {
    format!("G{:02}", id)
}

fn parse_position(id: u32, text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::trace!("Gate {}: ignoring unparsable field '{}'", id, text);
            None
        }
    }
}

/// Errors for gate sheet edits.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateSheetError {
    #[error("Gate sheet size {0} is out of range (1..={max})", max = MAX_GATES)]
    CapacityOutOfRange(u32),

    #[error("Gate id {id} is outside the sheet (1..={capacity})")]
    IdOutOfRange { id: u32, capacity: u32 },
}

/// Request-scoped collection of gates indexed by id.
///
/// Holds exactly `capacity` rows with ids `1..=capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSheet {
    gates: Vec<Gate>,
}

impl GateSheet {
    /// Create an empty sheet with `capacity` rows.
    pub fn new(capacity: u32) -> Result<Self, GateSheetError> {
        if capacity == 0 || capacity > MAX_GATES {
            return Err(GateSheetError::CapacityOutOfRange(capacity));
        }
        let gates = (1..=capacity)
            .map(|id| Gate {
                id,
                ..Gate::default()
            })
            .collect();
        Ok(Self { gates })
    }

    /// Number of rows in the sheet.
    pub fn capacity(&self) -> u32 {
        self.gates.len() as u32
    }

    /// Replace a gate's positions.
    pub fn set(
        &mut self,
        id: u32,
        open_position: Option<f64>,
        close_position: Option<f64>,
    ) -> Result<(), GateSheetError> {
        let gate = self.slot_mut(id)?;
        gate.open_position = open_position;
        gate.close_position = close_position;
        Ok(())
    }

    /// Replace a gate's positions from free-text fields.
    pub fn set_fields(
        &mut self,
        id: u32,
        open_text: &str,
        close_text: &str,
    ) -> Result<(), GateSheetError> {
        let parsed = Gate::from_fields(id, open_text, close_text);
        self.set(id, parsed.open_position, parsed.close_position)
    }

    /// Clear a gate's positions.
    pub fn clear(&mut self, id: u32) -> Result<(), GateSheetError> {
        self.set(id, None, None)
    }

    /// Look up a gate by id.
    pub fn get(&self, id: u32) -> Option<&Gate> {
        let index = id.checked_sub(1)? as usize;
        self.gates.get(index)
    }

    /// Iterate gates in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Number of gates with both positions supplied.
    pub fn complete_count(&self) -> usize {
        self.gates.iter().filter(|g| g.positions().is_some()).count()
    }

    fn slot_mut(&mut self, id: u32) -> Result<&mut Gate, GateSheetError> {
        let capacity = self.capacity();
        id.checked_sub(1)
            .and_then(|index| self.gates.get_mut(index as usize))
            .ok_or(GateSheetError::IdOutOfRange { id, capacity })
    }
}

/// Why a gate produced no times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, thiserror::Error)]
pub enum GateError {
    /// Open position must be larger than close position.
    #[error("open position {open} must be greater than close position {close}")]
    InvalidGatePair { open: f64, close: f64 },

    /// Position outside the travel range under the strict range policy.
    #[error("position {position} is outside the travel range [{min}, {max}]")]
    PositionOutOfRange { position: f64, min: f64, max: f64 },
}

/// Outcome for a single gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// Corrected open/close times in seconds.
    Timed { open_time: f64, close_time: f64 },
    /// Error sentinel for this gate only.
    Error(GateError),
}

/// Result row for one gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GateResult {
    pub gate_id: u32,
    pub outcome: GateOutcome,
}

impl GateResult {
    /// Corrected `(open, close)` times, if the gate was timed.
    pub fn times(&self) -> Option<(f64, f64)> {
        match self.outcome {
            GateOutcome::Timed {
                open_time,
                close_time,
            } => Some((open_time, close_time)),
            GateOutcome::Error(_) => None,
        }
    }

    /// Whether this gate carries an error sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, GateOutcome::Error(_))
    }

    /// Display label, e.g. `G07`.
    pub fn label(&self) -> String {
        gate_label(self.gate_id)
    }
}

//! Evaluator error types.

use crate::models::GateError;

/// Errors from position-to-time queries.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Position outside `[min, max]` under the strict range policy.
    #[error("Position {position} mm is outside the travel range [{min}, {max}] mm")]
    PositionOutOfRange { position: f64, min: f64, max: f64 },
}

/// Result type for evaluator queries.
pub type EvalResult<T> = Result<T, EvalError>;

impl From<EvalError> for GateError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::PositionOutOfRange { position, min, max } => {
                GateError::PositionOutOfRange { position, min, max }
            }
        }
    }
}

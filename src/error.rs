//! Error types for the formula engines

use thiserror::Error;

/// Input validation errors shared by every formula engine.
///
/// Interior undefined results (division by zero, non-positive log arguments)
/// are not errors: they surface as `None` fields in engine outputs so a
/// caller can show a neutral placeholder instead of crashing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} out of range: expected {min} to {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("unknown {field} value")]
    UnknownValue { field: &'static str },
}

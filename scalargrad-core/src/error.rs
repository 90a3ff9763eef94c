use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid exponent {exponent} for operation {operation}: the exponent must be a finite constant scalar")]
    InvalidExponent { exponent: f64, operation: String },

    #[error("Operands of operation {operation} live on different tapes")]
    TapeMismatch { operation: String },

    #[error("Cannot assign a value to node {index}: only leaf nodes may be updated")]
    NonLeafAssignment { index: usize },

    #[error("Internal error: {0}")]
    InternalError(String),
}

use thiserror::Error;

/// Custom error type for the PicoGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq/Clone for easier testing
pub enum PicoGradError {
    #[error("Domain error in operation '{operation}': input value {value} is outside the valid domain")]
    DomainError { operation: String, value: f64 },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Class index {index} is out of bounds for {n_classes} classes")]
    ClassIndexOutOfBounds { index: usize, n_classes: usize },

    #[error("Cannot operate on an empty list of scalars")]
    EmptyScalarList,

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Backward error: {0}")]
    BackwardError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

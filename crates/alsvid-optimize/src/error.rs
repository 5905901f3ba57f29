//! Error types for the optimization contract.

use thiserror::Error;

/// Errors surfaced by black boxes and optimization algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// A black box was evaluated with a vector of the wrong length.
    #[error("dimension mismatch: black box expects {expected} parameters, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An algorithm was given an initial guess of the wrong length.
    #[error("invalid initial guess: black box expects {expected} parameters, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// A cost-aware evaluation was requested with a non-positive or
    /// non-finite cost.
    #[error("invalid evaluation cost {cost}: cost must be positive and finite")]
    InvalidCost { cost: f64 },

    /// An evaluation failed inside the objective's collaborators.
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

/// Result type alias for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

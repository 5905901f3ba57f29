//! Error types for the variational interfaces.

use alsvid_optimize::OptimizeError;
use thiserror::Error;

/// Errors surfaced by ansatz, backend, and study collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariationalError {
    /// An ansatz was instantiated with a parameter vector of the wrong
    /// length.
    #[error("parameter count mismatch: ansatz expects {expected} parameters, got {actual}")]
    ParamCountMismatch { expected: usize, actual: usize },

    /// A study asked for a measurement key the record does not hold.
    #[error("measurement key '{key}' missing from record")]
    MissingMeasurement { key: String },

    /// The backend could not run an operation sequence.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// An optimization-layer error passing through.
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

/// Result type alias for variational operations.
pub type VariationalResult<T> = Result<T, VariationalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VariationalError::ParamCountMismatch {
            expected: 2,
            actual: 5,
        };
        assert!(err.to_string().contains("expects 2"));

        let err = VariationalError::MissingMeasurement {
            key: "all".to_string(),
        };
        assert!(err.to_string().contains("'all'"));
    }

    #[test]
    fn test_optimize_errors_convert() {
        let source = OptimizeError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        let err: VariationalError = source.clone().into();
        assert_eq!(err, VariationalError::Optimize(source.clone()));
        // Transparent wrapping keeps the inner message.
        assert_eq!(err.to_string(), source.to_string());
    }
}

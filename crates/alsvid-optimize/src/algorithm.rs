//! The optimization algorithm contract.

use crate::black_box::BlackBox;
use crate::error::{OptimizeError, OptimizeResult};
use crate::result::OptimizationResult;

/// A strategy for minimizing a black-box objective function.
///
/// Strategies are stateless beyond their configuration: construct once,
/// then call [`optimize`](Self::optimize) against any number of black
/// boxes. Each strategy documents whether and how it uses the optional
/// initial guesses.
pub trait OptimizationAlgorithm {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Minimize `black_box`, optionally starting from `initial_guess`
    /// and/or the batch `initial_guess_array`.
    ///
    /// A well-formed black box never makes this fail: abnormal outcomes
    /// are encoded in the returned result's status instead.
    ///
    /// # Errors
    /// Returns [`OptimizeError::InvalidDimension`] when a supplied guess
    /// length mismatches `black_box.dimension()`; errors from the black
    /// box's own evaluations propagate as-is.
    fn optimize(
        &self,
        black_box: &mut dyn BlackBox,
        initial_guess: Option<&[f64]>,
        initial_guess_array: Option<&[Vec<f64>]>,
    ) -> OptimizeResult<OptimizationResult>;
}

/// Guard shared by algorithms: checks every supplied guess against the
/// black box dimension.
pub fn validate_guesses(
    dimension: usize,
    initial_guess: Option<&[f64]>,
    initial_guess_array: Option<&[Vec<f64>]>,
) -> OptimizeResult<()> {
    if let Some(guess) = initial_guess {
        if guess.len() != dimension {
            return Err(OptimizeError::InvalidDimension {
                expected: dimension,
                actual: guess.len(),
            });
        }
    }
    for guess in initial_guess_array.unwrap_or_default() {
        if guess.len() != dimension {
            return Err(OptimizeError::InvalidDimension {
                expected: dimension,
                actual: guess.len(),
            });
        }
    }
    Ok(())
}

/// Tracks the best (minimal) value seen during a search.
///
/// NaN policy: a NaN candidate never replaces the current best, because
/// every ordinary comparison against NaN is false. Ties keep the first
/// minimal value encountered (stable scan, not stable sort). The initial
/// best is `+inf` with no parameters, so a search that only ever sees NaN
/// ends with [`parameters`](Self::parameters) still `None`.
#[derive(Debug, Clone)]
pub struct BestSeen {
    value: f64,
    parameters: Option<Vec<f64>>,
}

impl BestSeen {
    pub fn new() -> Self {
        Self {
            value: f64::INFINITY,
            parameters: None,
        }
    }

    /// Offer a candidate; it replaces the best only on strict improvement.
    pub fn offer(&mut self, value: f64, parameters: &[f64]) {
        if value < self.value {
            self.value = value;
            self.parameters = Some(parameters.to_vec());
        }
    }

    /// The minimal value seen; `+inf` when nothing has improved.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The parameters achieving the minimal value, if any candidate improved.
    pub fn parameters(&self) -> Option<&[f64]> {
        self.parameters.as_deref()
    }

    /// Consume the tracker, yielding `(value, parameters)`.
    pub fn into_parts(self) -> (f64, Option<Vec<f64>>) {
        (self.value, self.parameters)
    }
}

impl Default for BestSeen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_guesses() {
        assert!(validate_guesses(2, None, None).is_ok());
        assert!(validate_guesses(2, Some(&[1.0, 2.0]), None).is_ok());
        assert_eq!(
            validate_guesses(2, Some(&[1.0]), None),
            Err(OptimizeError::InvalidDimension {
                expected: 2,
                actual: 1
            })
        );

        let batch = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            validate_guesses(2, None, Some(&batch)),
            Err(OptimizeError::InvalidDimension {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_best_seen_tracks_minimum() {
        let mut best = BestSeen::new();
        assert_eq!(best.value(), f64::INFINITY);
        assert!(best.parameters().is_none());

        best.offer(3.0, &[3.0]);
        best.offer(1.0, &[1.0]);
        best.offer(2.0, &[2.0]);
        assert_eq!(best.value(), 1.0);
        assert_eq!(best.parameters(), Some(&[1.0][..]));
    }

    #[test]
    fn test_first_minimal_value_wins_ties() {
        let mut best = BestSeen::new();
        best.offer(1.0, &[10.0]);
        best.offer(1.0, &[20.0]);
        assert_eq!(best.parameters(), Some(&[10.0][..]));
    }

    #[test]
    fn test_nan_never_improves() {
        let mut best = BestSeen::new();
        best.offer(f64::NAN, &[0.0]);
        assert!(best.parameters().is_none());

        best.offer(2.0, &[2.0]);
        best.offer(f64::NAN, &[9.0]);
        assert_eq!(best.value(), 2.0);
        assert_eq!(best.parameters(), Some(&[2.0][..]));
    }

    #[test]
    fn test_negative_infinity_is_a_valid_minimum() {
        let mut best = BestSeen::new();
        best.offer(f64::NEG_INFINITY, &[1.0]);
        assert_eq!(best.value(), f64::NEG_INFINITY);
        assert!(best.parameters().is_some());
    }
}

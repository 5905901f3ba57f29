//! Black-box objective functions.
//!
//! A black box is queried only through its declared evaluation interface:
//! a fixed `dimension`, an exact `evaluate`, and an optional cost-aware
//! `evaluate_with_cost` where spending more cost buys a less noisy
//! estimate of the true value.

use crate::error::{OptimizeError, OptimizeResult};

/// A black-box objective function over a fixed-dimension real vector.
///
/// Implementations may be stateful: [`evaluate`](Self::evaluate) takes
/// `&mut self` so that wrappers like [`Tracked`](crate::Tracked) can
/// record each call and so that evaluation order stays semantically
/// significant. Callers must not assume two calls with identical input
/// return identical output.
pub trait BlackBox {
    /// The length of the vectors accepted by [`evaluate`](Self::evaluate).
    ///
    /// Positive and constant for the lifetime of the object.
    fn dimension(&self) -> usize;

    /// Optional bounds on the inputs, one `(low, high)` pair per dimension.
    fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        None
    }

    /// Evaluate the objective function at `x`.
    ///
    /// Deterministic given `x` for noiseless implementations.
    ///
    /// # Errors
    /// Returns [`OptimizeError::DimensionMismatch`] if `x.len()` differs
    /// from [`dimension`](Self::dimension).
    fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64>;

    /// Evaluate the objective function with a cost budget.
    ///
    /// Higher cost buys a less noisy estimate. The default implementation
    /// ignores the cost and evaluates exactly, the behavior of a noiseless
    /// box under an unbounded budget.
    ///
    /// # Errors
    /// Returns [`OptimizeError::InvalidCost`] if `cost` is not positive
    /// and finite, or any error from [`evaluate`](Self::evaluate).
    fn evaluate_with_cost(&mut self, x: &[f64], cost: f64) -> OptimizeResult<f64> {
        check_cost(cost)?;
        self.evaluate(x)
    }

    /// Bounds on the evaluation noise at the given cost.
    ///
    /// Returns `(lower, upper)` such that the noise of one evaluation at
    /// `cost` lies within the interval with probability at least
    /// `confidence`; implementations pick a default confidence when `None`
    /// is passed. The default is the trivial bound.
    fn noise_bounds(&self, cost: f64, confidence: Option<f64>) -> (f64, f64) {
        let _ = (cost, confidence);
        (f64::NEG_INFINITY, f64::INFINITY)
    }
}

/// Guard shared by [`BlackBox`] implementations: checks that `x` has the
/// expected length.
pub fn check_dimension(expected: usize, x: &[f64]) -> OptimizeResult<()> {
    if x.len() != expected {
        return Err(OptimizeError::DimensionMismatch {
            expected,
            actual: x.len(),
        });
    }
    Ok(())
}

/// Guard shared by cost-aware evaluations: checks that `cost` is a
/// positive finite real.
pub fn check_cost(cost: f64) -> OptimizeResult<()> {
    if !cost.is_finite() || cost <= 0.0 {
        return Err(OptimizeError::InvalidCost { cost });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Noiseless box returning a constant, for exercising the defaults.
    struct Constant(f64);

    impl BlackBox for Constant {
        fn dimension(&self) -> usize {
            1
        }

        fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64> {
            check_dimension(self.dimension(), x)?;
            Ok(self.0)
        }
    }

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension(2, &[0.0, 1.0]).is_ok());
        assert_eq!(
            check_dimension(2, &[0.0, 1.0, 2.0]),
            Err(OptimizeError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_check_cost_rejects_nonpositive_and_nonfinite() {
        assert!(check_cost(1e-9).is_ok());
        for cost in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_cost(cost),
                Err(OptimizeError::InvalidCost { .. })
            ));
        }
    }

    #[test]
    fn test_default_cost_aware_evaluation_is_exact() {
        let mut bb = Constant(4.25);
        assert_eq!(bb.evaluate(&[0.0]).unwrap(), 4.25);
        assert_eq!(bb.evaluate_with_cost(&[0.0], 1.0).unwrap(), 4.25);
        assert_eq!(bb.evaluate_with_cost(&[0.0], 1e12).unwrap(), 4.25);
    }

    #[test]
    fn test_default_noise_bounds_are_trivial() {
        let bb = Constant(0.0);
        let (lo, hi) = bb.noise_bounds(10.0, None);
        assert_eq!(lo, f64::NEG_INFINITY);
        assert_eq!(hi, f64::INFINITY);
    }

    #[test]
    fn test_default_bounds_absent() {
        let bb = Constant(0.0);
        assert!(bb.bounds().is_none());
    }
}

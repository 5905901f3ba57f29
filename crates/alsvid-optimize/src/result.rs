//! Optimization run results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome code reported by an optimization algorithm.
///
/// The integer codes are stable; `0` is success, matching the convention
/// of classical optimization packages. Strategies may not need every
/// variant, but every run reports exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationStatus {
    /// The run completed normally.
    Success,
    /// The run stopped because the objective stopped improving.
    Converged,
    /// The run stopped after exhausting its evaluation budget.
    MaxEvaluationsReached,
    /// Every candidate evaluated to NaN, so no minimum could be selected.
    NumericalFailure,
}

impl OptimizationStatus {
    /// Stable integer code for this status.
    pub fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Converged => 1,
            Self::MaxEvaluationsReached => 2,
            Self::NumericalFailure => 3,
        }
    }
}

/// The result of optimizing a black-box objective function.
///
/// Created once at the end of an optimization run and never mutated. For
/// noiseless black boxes, `optimal_value` equals the exact evaluation at
/// `optimal_parameters` up to floating-point evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The minimal objective value found.
    pub optimal_value: f64,
    /// The parameter vector achieving `optimal_value`; its length equals
    /// the dimension of the optimized black box.
    pub optimal_parameters: Vec<f64>,
    /// The number of objective queries charged to the run.
    pub num_evaluations: usize,
    /// The total evaluation cost charged to the run.
    pub cost_spent: f64,
    /// Outcome code.
    pub status: OptimizationStatus,
    /// Human-readable summary from the algorithm.
    pub message: String,
    /// Wall-clock duration of the run, when the algorithm measured it.
    pub time: Option<Duration>,
    /// RNG seed that produced the run, when the algorithm records one.
    pub seed: Option<u64>,
}

impl OptimizationResult {
    /// A result with the required fields; `time` and `seed` attach via
    /// [`with_time`](Self::with_time) and [`with_seed`](Self::with_seed).
    pub fn new(
        optimal_value: f64,
        optimal_parameters: Vec<f64>,
        num_evaluations: usize,
        cost_spent: f64,
        status: OptimizationStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            optimal_value,
            optimal_parameters,
            num_evaluations,
            cost_spent,
            status,
            message: message.into(),
            time: None,
            seed: None,
        }
    }

    /// Attach the measured wall-clock duration.
    pub fn with_time(mut self, time: Duration) -> Self {
        self.time = Some(time);
        self
    }

    /// Attach the RNG seed that produced the run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        assert_eq!(OptimizationStatus::Success.code(), 0);
        assert_eq!(OptimizationStatus::Converged.code(), 1);
        assert_eq!(OptimizationStatus::MaxEvaluationsReached.code(), 2);
        assert_eq!(OptimizationStatus::NumericalFailure.code(), 3);
    }

    #[test]
    fn test_builders_attach_optional_fields() {
        let result = OptimizationResult::new(
            1.5,
            vec![0.1, 0.2],
            7,
            3.0,
            OptimizationStatus::Success,
            "done",
        )
        .with_time(Duration::from_millis(12))
        .with_seed(99);

        assert_eq!(result.optimal_parameters.len(), 2);
        assert_eq!(result.time, Some(Duration::from_millis(12)));
        assert_eq!(result.seed, Some(99));
    }

    #[test]
    fn test_json_round_trip() {
        let result = OptimizationResult::new(
            0.25,
            vec![0.5, 0.0],
            5,
            10.0,
            OptimizationStatus::MaxEvaluationsReached,
            "budget exhausted",
        )
        .with_seed(7);

        let json = serde_json::to_string(&result).unwrap();
        let back: OptimizationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

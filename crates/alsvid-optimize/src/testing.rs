//! Shared test fixtures: a quadratic black box, its noisy variant, and a
//! deliberately naive probe strategy with fixture-grade bookkeeping.
//!
//! These live in a public module so downstream crates can exercise the
//! contract against known objectives without redefining them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::algorithm::{BestSeen, OptimizationAlgorithm, validate_guesses};
use crate::black_box::{BlackBox, check_dimension};
use crate::error::OptimizeResult;
use crate::noise::Noisy;
use crate::result::{OptimizationResult, OptimizationStatus};

/// Noiseless quadratic bowl: `evaluate(x)` is the sum of squared entries.
///
/// The global minimum is 0 at the origin. Defaults to two parameters.
#[derive(Debug, Clone)]
pub struct SumOfSquares {
    dimension: usize,
}

impl SumOfSquares {
    pub fn new() -> Self {
        Self { dimension: 2 }
    }

    /// A bowl over `dimension` parameters. Panics if `dimension` is zero.
    pub fn with_dimension(dimension: usize) -> Self {
        assert!(dimension > 0, "SumOfSquares needs at least one parameter");
        Self { dimension }
    }
}

impl Default for SumOfSquares {
    fn default() -> Self {
        Self::new()
    }
}

impl BlackBox for SumOfSquares {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64> {
        check_dimension(self.dimension, x)?;
        Ok(x.iter().map(|v| v * v).sum())
    }
}

/// The quadratic bowl wrapped in cost-scaled Gaussian noise.
///
/// `evaluate` stays exact; `evaluate_with_cost(x, c)` has expected value
/// `evaluate(x)` and standard deviation `1 / c`.
pub fn noisy_sum_of_squares(seed: u64) -> Noisy<SumOfSquares> {
    Noisy::new(SumOfSquares::new(), seed)
}

/// Reference strategy: five seeded standard-normal probes, keep the best.
///
/// Guesses are validated, then ignored. Bookkeeping is deliberately wrong:
/// the result always claims `num_evaluations = 1` and `cost_spent = 0.0`
/// even though five queries ran. That makes the fixture useful for testing
/// code that must not trust a strategy's self-reported accounting; pair it
/// with [`Tracked`](crate::tracked::Tracked) for the real numbers.
#[derive(Debug, Clone)]
pub struct RandomProbe {
    seed: u64,
}

impl RandomProbe {
    /// Number of probes drawn per `optimize` call.
    pub const SAMPLES: usize = 5;

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl OptimizationAlgorithm for RandomProbe {
    fn name(&self) -> &str {
        "random_probe"
    }

    fn optimize(
        &self,
        black_box: &mut dyn BlackBox,
        initial_guess: Option<&[f64]>,
        initial_guess_array: Option<&[Vec<f64>]>,
    ) -> OptimizeResult<OptimizationResult> {
        let dimension = black_box.dimension();
        validate_guesses(dimension, initial_guess, initial_guess_array)?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best = BestSeen::new();
        let mut last = vec![0.0; dimension];
        for _ in 0..Self::SAMPLES {
            let guess: Vec<f64> = (0..dimension)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect();
            let value = black_box.evaluate(&guess)?;
            best.offer(value, &guess);
            last = guess;
        }

        // Placeholder accounting is part of the fixture's contract.
        let result = match best.into_parts() {
            (value, Some(parameters)) => OptimizationResult::new(
                value,
                parameters,
                1,
                0.0,
                OptimizationStatus::Success,
                "success",
            ),
            (_, None) => OptimizationResult::new(
                f64::NAN,
                last,
                1,
                0.0,
                OptimizationStatus::NumericalFailure,
                "all evaluations returned NaN",
            ),
        };
        Ok(result.with_seed(self.seed))
    }
}

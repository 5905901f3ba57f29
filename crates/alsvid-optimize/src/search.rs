//! Gaussian random search over the parameter space.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{debug, info};

use crate::algorithm::{BestSeen, OptimizationAlgorithm, validate_guesses};
use crate::black_box::BlackBox;
use crate::error::OptimizeResult;
use crate::result::{OptimizationResult, OptimizationStatus};

/// Random search: evaluates centered normal draws and keeps the best.
///
/// Initial guesses are evaluated first, then standard-normal draws
/// (scaled by `stddev`) fill the candidate list up to `samples`. Supplied
/// guesses always run even when they exceed `samples`. Reported
/// `num_evaluations` and `cost_spent` reflect the actual queries made.
///
/// # Example
/// ```
/// use alsvid_optimize::{OptimizationAlgorithm, RandomSearch};
/// use alsvid_optimize::testing::SumOfSquares;
///
/// let search = RandomSearch::new(20).with_seed(7);
/// let mut box_ = SumOfSquares::new();
/// let result = search.optimize(&mut box_, None, None).unwrap();
/// assert_eq!(result.num_evaluations, 20);
/// assert!(result.optimal_value >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSearch {
    samples: usize,
    stddev: f64,
    cost: Option<f64>,
    seed: Option<u64>,
}

impl RandomSearch {
    /// A search evaluating at least one candidate.
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(1),
            stddev: 1.0,
            cost: None,
            seed: None,
        }
    }

    /// Scale the normal draws by `stddev` (default 1.0).
    pub fn with_stddev(mut self, stddev: f64) -> Self {
        self.stddev = stddev;
        self
    }

    /// Spend `cost` per evaluation, routing queries through
    /// [`BlackBox::evaluate_with_cost`].
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Fix the RNG seed for reproducible searches. Unseeded searches draw
    /// a fresh seed and record it in the result.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn draw(&self, rng: &mut StdRng, dimension: usize) -> Vec<f64> {
        (0..dimension)
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                z * self.stddev
            })
            .collect()
    }
}

impl Default for RandomSearch {
    fn default() -> Self {
        Self::new(5)
    }
}

impl OptimizationAlgorithm for RandomSearch {
    fn name(&self) -> &str {
        "random_search"
    }

    fn optimize(
        &self,
        black_box: &mut dyn BlackBox,
        initial_guess: Option<&[f64]>,
        initial_guess_array: Option<&[Vec<f64>]>,
    ) -> OptimizeResult<OptimizationResult> {
        let dimension = black_box.dimension();
        validate_guesses(dimension, initial_guess, initial_guess_array)?;

        let started = Instant::now();
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut candidates: Vec<Vec<f64>> = Vec::with_capacity(self.samples);
        if let Some(guess) = initial_guess {
            candidates.push(guess.to_vec());
        }
        candidates.extend(initial_guess_array.unwrap_or_default().iter().cloned());
        while candidates.len() < self.samples {
            candidates.push(self.draw(&mut rng, dimension));
        }

        let mut best = BestSeen::new();
        let mut cost_spent = 0.0;
        for (sample, candidate) in candidates.iter().enumerate() {
            let value = match self.cost {
                Some(cost) => {
                    cost_spent += cost;
                    black_box.evaluate_with_cost(candidate, cost)?
                }
                None => black_box.evaluate(candidate)?,
            };
            debug!("candidate {} evaluated to {}", sample, value);
            best.offer(value, candidate);
        }

        let num_evaluations = candidates.len();
        let result = match best.into_parts() {
            (optimal_value, Some(optimal_parameters)) => {
                info!(
                    "{} finished: best {} after {} evaluations",
                    self.name(),
                    optimal_value,
                    num_evaluations
                );
                OptimizationResult::new(
                    optimal_value,
                    optimal_parameters,
                    num_evaluations,
                    cost_spent,
                    OptimizationStatus::Success,
                    "success",
                )
            }
            (_, None) => {
                // Every evaluation came back NaN. Report the failure with a
                // well-formed parameter vector instead of erroring.
                let fallback = candidates
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| vec![0.0; dimension]);
                OptimizationResult::new(
                    f64::NAN,
                    fallback,
                    num_evaluations,
                    cost_spent,
                    OptimizationStatus::NumericalFailure,
                    "all evaluations returned NaN",
                )
            }
        };
        Ok(result.with_time(started.elapsed()).with_seed(seed))
    }
}

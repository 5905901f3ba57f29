//! Cost-scaled evaluation noise.
//!
//! Noisy black boxes are built by composition: a base evaluator plus a
//! [`NoiseModel`] drawing from an explicit, seedable random source. This
//! replaces per-type overrides and implicit global RNG state, so noisy
//! evaluations stay reproducible in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::black_box::{BlackBox, check_cost};
use crate::error::OptimizeResult;

/// A noise law for cost-aware evaluation.
pub trait NoiseModel {
    /// Draw one noise sample at the given cost. `None` means an unbounded
    /// budget: exact evaluation, zero noise.
    fn sample(&self, cost: Option<f64>, rng: &mut StdRng) -> f64;

    /// Symmetric magnitude `m` such that one draw at `cost` lies in
    /// `[-m, m]` with probability at least `confidence`.
    fn magnitude_bound(&self, cost: f64, confidence: f64) -> f64;
}

/// The standard noise law: a standard-normal draw divided by the cost.
///
/// Expected value 0 and standard deviation `1/cost`, so higher cost
/// concentrates evaluations around the true value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostScaledGaussian;

impl NoiseModel for CostScaledGaussian {
    fn sample(&self, cost: Option<f64>, rng: &mut StdRng) -> f64 {
        match cost {
            None => 0.0,
            Some(cost) => {
                let z: f64 = rng.sample(StandardNormal);
                z / cost
            }
        }
    }

    fn magnitude_bound(&self, cost: f64, confidence: f64) -> f64 {
        // Chebyshev: P(|X| >= k·σ) <= 1/k² with σ = 1/cost. Distribution-
        // free, hence conservative for the Gaussian tail.
        let k = (1.0 / (1.0 - confidence)).sqrt();
        k / cost
    }
}

/// A black box built from an exact base evaluator and a noise model.
///
/// [`evaluate`](BlackBox::evaluate) stays exact;
/// [`evaluate_with_cost`](BlackBox::evaluate_with_cost) perturbs the exact
/// value by one draw from the model. The random source is owned by the
/// wrapper and seeded at construction.
#[derive(Debug)]
pub struct Noisy<B, N = CostScaledGaussian> {
    inner: B,
    model: N,
    rng: StdRng,
}

impl<B: BlackBox> Noisy<B> {
    /// Wrap `inner` with the standard cost-scaled Gaussian law.
    pub fn new(inner: B, seed: u64) -> Self {
        Self::with_model(inner, CostScaledGaussian, seed)
    }
}

impl<B: BlackBox, N: NoiseModel> Noisy<B, N> {
    /// Confidence used by `noise_bounds` when the caller passes `None`.
    const DEFAULT_CONFIDENCE: f64 = 0.99;

    /// Wrap `inner` with an explicit noise model.
    pub fn with_model(inner: B, model: N, seed: u64) -> Self {
        Self {
            inner,
            model,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The wrapped evaluator.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: BlackBox, N: NoiseModel> BlackBox for Noisy<B, N> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        self.inner.bounds()
    }

    fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64> {
        self.inner.evaluate(x)
    }

    fn evaluate_with_cost(&mut self, x: &[f64], cost: f64) -> OptimizeResult<f64> {
        check_cost(cost)?;
        let exact = self.inner.evaluate(x)?;
        Ok(exact + self.model.sample(Some(cost), &mut self.rng))
    }

    fn noise_bounds(&self, cost: f64, confidence: Option<f64>) -> (f64, f64) {
        let m = self
            .model
            .magnitude_bound(cost, confidence.unwrap_or(Self::DEFAULT_CONFIDENCE));
        (-m, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_cost_means_no_noise() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(CostScaledGaussian.sample(None, &mut rng), 0.0);
        }
    }

    #[test]
    fn test_sample_mean_and_variance_scale_with_cost() {
        // Var[noise] = 1/cost²: statistical check over many seeded draws.
        let cost = 4.0;
        let n = 10_000;
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<f64> = (0..n)
            .map(|_| CostScaledGaussian.sample(Some(cost), &mut rng))
            .collect();

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / n as f64;

        assert_relative_eq!(mean, 0.0, epsilon = 0.02);
        assert_relative_eq!(var, 1.0 / (cost * cost), epsilon = 0.01);
    }

    #[test]
    fn test_higher_cost_tightens_magnitude_bound() {
        let cheap = CostScaledGaussian.magnitude_bound(1.0, 0.95);
        let pricey = CostScaledGaussian.magnitude_bound(100.0, 0.95);
        assert!(pricey < cheap);
        assert_relative_eq!(pricey * 100.0, cheap, max_relative = 1e-12);
    }

    #[test]
    fn test_same_seed_replays_the_same_draws() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                CostScaledGaussian.sample(Some(2.0), &mut a),
                CostScaledGaussian.sample(Some(2.0), &mut b)
            );
        }
    }
}

//! Studies reduce measurement outcomes to the scalar under optimization;
//! [`StudyBlackBox`] exposes an (ansatz, study, backend) triple as a
//! black-box objective.

use alsvid_optimize::{
    BlackBox, CostScaledGaussian, NoiseModel, OptimizeError, OptimizeResult, check_cost,
    check_dimension,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::ansatz::Ansatz;
use crate::backend::{Backend, MeasurementRecord};
use crate::error::{VariationalError, VariationalResult};

/// Reduces a measurement record to the scalar under optimization.
pub trait Study {
    /// The scalar value of one record.
    ///
    /// # Errors
    /// Fails when the record lacks the measurement the study reads.
    fn value(&self, record: &MeasurementRecord) -> VariationalResult<f64>;

    /// Additive noise for a cost-aware evaluation. `None` means an
    /// unbounded budget. Defaults to no noise.
    fn noise(&mut self, _cost: Option<f64>) -> f64 {
        0.0
    }
}

/// A study with a cost-scaled noise law attached.
///
/// Values delegate to the wrapped study; `noise` draws from the model
/// through an owned random source seeded at construction, the same
/// composition [`alsvid_optimize::Noisy`] uses for black boxes.
pub struct NoisyStudy<S, N = CostScaledGaussian> {
    inner: S,
    model: N,
    rng: StdRng,
}

impl<S: Study> NoisyStudy<S> {
    /// Wrap `inner` with the standard cost-scaled Gaussian law.
    pub fn new(inner: S, seed: u64) -> Self {
        Self::with_model(inner, CostScaledGaussian, seed)
    }
}

impl<S: Study, N: NoiseModel> NoisyStudy<S, N> {
    /// Wrap `inner` with an explicit noise model.
    pub fn with_model(inner: S, model: N, seed: u64) -> Self {
        Self {
            inner,
            model,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The wrapped study.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Study, N: NoiseModel> Study for NoisyStudy<S, N> {
    fn value(&self, record: &MeasurementRecord) -> VariationalResult<f64> {
        self.inner.value(record)
    }

    fn noise(&mut self, cost: Option<f64>) -> f64 {
        self.model.sample(cost, &mut self.rng)
    }
}

/// An (ansatz, study, backend) triple exposed as a black-box objective.
///
/// `evaluate` instantiates the ansatz at the query point, runs the
/// backend, and reduces the outcomes through the study. Collaborator
/// failures surface as [`OptimizeError::Evaluation`]; wrong-length
/// queries fail with [`OptimizeError::DimensionMismatch`] before any
/// backend work.
pub struct StudyBlackBox<A, S, B> {
    ansatz: A,
    study: S,
    backend: B,
}

impl<A: Ansatz, S: Study, B: Backend> StudyBlackBox<A, S, B> {
    pub fn new(ansatz: A, study: S, backend: B) -> Self {
        Self {
            ansatz,
            study,
            backend,
        }
    }

    /// The wrapped ansatz.
    pub fn ansatz(&self) -> &A {
        &self.ansatz
    }

    fn run_once(&mut self, x: &[f64]) -> VariationalResult<f64> {
        let ops = self.ansatz.operations(x)?;
        let sites = self.ansatz.sites();
        let record = self.backend.run(&ops, &sites)?;
        let value = self.study.value(&record)?;
        debug!(
            "study value {} for key '{}'",
            value,
            self.ansatz.measurement_key()
        );
        Ok(value)
    }
}

fn to_eval_error(err: VariationalError) -> OptimizeError {
    match err {
        VariationalError::Optimize(inner) => inner,
        other => OptimizeError::Evaluation(other.to_string()),
    }
}

impl<A: Ansatz, S: Study, B: Backend> BlackBox for StudyBlackBox<A, S, B> {
    fn dimension(&self) -> usize {
        self.ansatz.dimension()
    }

    fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        self.ansatz.param_bounds()
    }

    fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64> {
        check_dimension(self.dimension(), x)?;
        self.run_once(x).map_err(to_eval_error)
    }

    fn evaluate_with_cost(&mut self, x: &[f64], cost: f64) -> OptimizeResult<f64> {
        check_cost(cost)?;
        let exact = self.evaluate(x)?;
        Ok(exact + self.study.noise(Some(cost)))
    }
}

//! Evaluation tracking for stateful black boxes.

use serde::{Deserialize, Serialize};

use crate::black_box::BlackBox;
use crate::error::OptimizeResult;

/// One recorded objective query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The value the black box returned.
    pub value: f64,
    /// The cost charged, when the query was cost-aware.
    pub cost: Option<f64>,
    /// The queried point, when point saving is enabled.
    pub point: Option<Vec<f64>>,
}

/// A black box that keeps track of the queries made against it.
///
/// Wraps any [`BlackBox`] and accumulates state across calls: the history
/// of returned values, the number of evaluations, and the total cost
/// spent. This is the "stateful black box" of the contract, where
/// evaluation order is semantically significant and callers must not
/// assume referential transparency. Single-writer, single-threaded use
/// only.
#[derive(Debug)]
pub struct Tracked<B> {
    inner: B,
    history: Vec<Evaluation>,
    cost_spent: f64,
    save_points: bool,
}

impl<B: BlackBox> Tracked<B> {
    /// Track `inner`, recording values and costs but not query points.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            history: Vec::new(),
            cost_spent: 0.0,
            save_points: false,
        }
    }

    /// Also record a copy of every queried point.
    pub fn with_saved_points(mut self) -> Self {
        self.save_points = true;
        self
    }

    /// Number of objective queries recorded so far.
    pub fn num_evaluations(&self) -> usize {
        self.history.len()
    }

    /// Total cost charged across all cost-aware queries.
    pub fn cost_spent(&self) -> f64 {
        self.cost_spent
    }

    /// The recorded queries, in call order.
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    /// Unwrap, discarding the recorded history.
    pub fn into_inner(self) -> B {
        self.inner
    }

    fn record(&mut self, value: f64, cost: Option<f64>, x: &[f64]) {
        self.history.push(Evaluation {
            value,
            cost,
            point: self.save_points.then(|| x.to_vec()),
        });
        if let Some(cost) = cost {
            self.cost_spent += cost;
        }
    }
}

impl<B: BlackBox> BlackBox for Tracked<B> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        self.inner.bounds()
    }

    fn evaluate(&mut self, x: &[f64]) -> OptimizeResult<f64> {
        let value = self.inner.evaluate(x)?;
        self.record(value, None, x);
        Ok(value)
    }

    fn evaluate_with_cost(&mut self, x: &[f64], cost: f64) -> OptimizeResult<f64> {
        let value = self.inner.evaluate_with_cost(x, cost)?;
        self.record(value, Some(cost), x);
        Ok(value)
    }

    fn noise_bounds(&self, cost: f64, confidence: Option<f64>) -> (f64, f64) {
        self.inner.noise_bounds(cost, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SumOfSquares;

    #[test]
    fn test_counts_and_cost_accumulate() {
        let mut bb = Tracked::new(SumOfSquares::new());
        assert_eq!(bb.num_evaluations(), 0);
        assert_eq!(bb.cost_spent(), 0.0);

        bb.evaluate(&[1.0, 2.0]).unwrap();
        bb.evaluate_with_cost(&[0.0, 0.0], 3.0).unwrap();
        bb.evaluate_with_cost(&[0.5, 0.5], 2.5).unwrap();

        assert_eq!(bb.num_evaluations(), 3);
        assert_eq!(bb.cost_spent(), 5.5);
        assert_eq!(bb.history()[0].value, 5.0);
        assert_eq!(bb.history()[1].cost, Some(3.0));
        assert_eq!(bb.history()[0].cost, None);
    }

    #[test]
    fn test_repeated_queries_on_pure_inner_return_identical_values() {
        // The wrapper adds bookkeeping, not perturbation: a pure inner box
        // stays repeatable even though the tracked box is stateful.
        let mut bb = Tracked::new(SumOfSquares::new());
        let first = bb.evaluate(&[0.3, -0.4]).unwrap();
        let second = bb.evaluate(&[0.3, -0.4]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dimension_constant_across_calls() {
        let mut bb = Tracked::new(SumOfSquares::new());
        let before = bb.dimension();
        bb.evaluate(&[1.0, 1.0]).unwrap();
        bb.evaluate_with_cost(&[2.0, 2.0], 1.0).unwrap();
        assert_eq!(bb.dimension(), before);
    }

    #[test]
    fn test_points_saved_only_on_request() {
        let mut plain = Tracked::new(SumOfSquares::new());
        plain.evaluate(&[1.0, 2.0]).unwrap();
        assert!(plain.history()[0].point.is_none());

        let mut saving = Tracked::new(SumOfSquares::new()).with_saved_points();
        saving.evaluate(&[1.0, 2.0]).unwrap();
        assert_eq!(saving.history()[0].point.as_deref(), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_failed_queries_are_not_recorded() {
        let mut bb = Tracked::new(SumOfSquares::new());
        assert!(bb.evaluate(&[1.0, 2.0, 3.0]).is_err());
        assert!(bb.evaluate_with_cost(&[1.0, 2.0], -1.0).is_err());
        assert_eq!(bb.num_evaluations(), 0);
        assert_eq!(bb.cost_spent(), 0.0);
    }
}

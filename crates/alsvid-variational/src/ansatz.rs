//! The ansatz contract: named parameters and a parameterized operation
//! sequence ending in a tagged measurement.

use serde::{Deserialize, Serialize};

use crate::error::{VariationalError, VariationalResult};

/// Handle for a site (qubit) in a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId(pub u32);

impl SiteId {
    /// The first `count` sites on a line, in order.
    pub fn line(count: u32) -> Vec<SiteId> {
        (0..count).map(SiteId).collect()
    }
}

/// Minimal operation vocabulary an ansatz emits.
///
/// The engine consuming these stays behind the backend trait; this
/// vocabulary covers only what the interfaces here need to express.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CircuitOp {
    /// X rotation by `exponent` half-turns on one site.
    XPow { site: SiteId, exponent: f64 },
    /// Controlled-Z between two sites.
    CZ { a: SiteId, b: SiteId },
    /// Measure `sites` under `key`, in the listed order.
    Measure { key: String, sites: Vec<SiteId> },
}

/// A parameterized operation sequence over a fixed site layout.
///
/// Parameters are named, ordered, and unique; the layout is derived
/// deterministically so repeated calls to [`sites`](Self::sites) agree.
/// Instantiated sequences end in a measurement of the read-out sites
/// tagged with [`measurement_key`](Self::measurement_key).
pub trait Ansatz {
    /// Ordered, unique parameter names.
    fn param_names(&self) -> Vec<String>;

    /// Number of parameters.
    fn dimension(&self) -> usize {
        self.param_names().len()
    }

    /// The fixed site layout.
    fn sites(&self) -> Vec<SiteId>;

    /// Key tagging the final measurement.
    fn measurement_key(&self) -> &str;

    /// Instantiate the operation sequence at `params`.
    ///
    /// # Errors
    /// Fails with [`VariationalError::ParamCountMismatch`] when the
    /// vector length differs from [`dimension`](Self::dimension).
    fn operations(&self, params: &[f64]) -> VariationalResult<Vec<CircuitOp>>;

    /// Per-parameter bounds, when the ansatz constrains them.
    fn param_bounds(&self) -> Option<Vec<(f64, f64)>> {
        None
    }

    /// Starting point for optimizers that want one.
    fn default_initial_params(&self) -> Vec<f64> {
        vec![0.0; self.dimension()]
    }
}

/// Guard shared by ansatz implementations.
pub fn check_param_count(expected: usize, params: &[f64]) -> VariationalResult<()> {
    if params.len() != expected {
        return Err(VariationalError::ParamCountMismatch {
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_layout_is_ordered() {
        assert_eq!(SiteId::line(3), vec![SiteId(0), SiteId(1), SiteId(2)]);
        assert!(SiteId::line(0).is_empty());
    }

    #[test]
    fn test_check_param_count() {
        assert!(check_param_count(2, &[0.1, 0.2]).is_ok());
        assert_eq!(
            check_param_count(2, &[0.1]),
            Err(VariationalError::ParamCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_ops_serialize_to_json() {
        let op = CircuitOp::Measure {
            key: "all".to_string(),
            sites: SiteId::line(2),
        };
        let json = serde_json::to_string(&op).unwrap();
        let back: CircuitOp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}

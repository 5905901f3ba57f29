//! Shared test fixtures: a two-site ansatz, a deterministic threshold
//! backend, and a study counting excited sites.

use rustc_hash::FxHashMap;

use crate::ansatz::{Ansatz, CircuitOp, SiteId, check_param_count};
use crate::backend::{Backend, MeasurementRecord};
use crate::error::{VariationalError, VariationalResult};
use crate::study::{NoisyStudy, Study};

/// The toy two-site ansatz:
///
/// ```text
/// 0: ───X^theta0───@───X^theta0───M('all')───
///                  │              │
/// 1: ───X^theta1───@───X^theta1───M──────────
/// ```
///
/// Each parameter is an X-power exponent applied to its site before and
/// after a CZ; both sites are read out under the `"all"` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSiteAnsatz;

impl TwoSiteAnsatz {
    pub fn new() -> Self {
        Self
    }
}

impl Ansatz for TwoSiteAnsatz {
    fn param_names(&self) -> Vec<String> {
        vec!["theta0".to_string(), "theta1".to_string()]
    }

    fn sites(&self) -> Vec<SiteId> {
        SiteId::line(2)
    }

    fn measurement_key(&self) -> &str {
        "all"
    }

    fn operations(&self, params: &[f64]) -> VariationalResult<Vec<CircuitOp>> {
        check_param_count(2, params)?;
        let sites = self.sites();
        let (a, b) = (sites[0], sites[1]);
        Ok(vec![
            CircuitOp::XPow {
                site: a,
                exponent: params[0],
            },
            CircuitOp::XPow {
                site: b,
                exponent: params[1],
            },
            CircuitOp::CZ { a, b },
            CircuitOp::XPow {
                site: a,
                exponent: params[0],
            },
            CircuitOp::XPow {
                site: b,
                exponent: params[1],
            },
            CircuitOp::Measure {
                key: self.measurement_key().to_string(),
                sites,
            },
        ])
    }
}

/// Deterministic stub engine: no amplitudes, no sampling.
///
/// X-power exponents accumulate per site; a measurement reads a site as 1
/// when its accumulated rotation lands in the open interval (0.5, 1.5)
/// half-turns, modulo full turns. CZ only shifts phase and never flips a
/// threshold bit, so it is ignored.
#[derive(Debug, Clone)]
pub struct ThresholdBackend {
    repetitions: usize,
}

impl ThresholdBackend {
    pub fn new() -> Self {
        Self { repetitions: 1 }
    }

    /// Emit `repetitions` identical rows per measurement (at least one).
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }
}

impl Default for ThresholdBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ThresholdBackend {
    fn run(
        &mut self,
        ops: &[CircuitOp],
        sites: &[SiteId],
    ) -> VariationalResult<MeasurementRecord> {
        let mut turns: FxHashMap<SiteId, f64> = sites.iter().map(|s| (*s, 0.0)).collect();
        let mut record = MeasurementRecord::new();
        for op in ops {
            match op {
                CircuitOp::XPow { site, exponent } => {
                    *turns.entry(*site).or_insert(0.0) += *exponent;
                }
                CircuitOp::CZ { .. } => {}
                CircuitOp::Measure { key, sites: measured } => {
                    let row: Vec<u8> = measured
                        .iter()
                        .map(|site| {
                            let r = turns.get(site).copied().unwrap_or(0.0).rem_euclid(2.0);
                            u8::from(r > 0.5 && r < 1.5)
                        })
                        .collect();
                    for _ in 0..self.repetitions {
                        record.push(key, row.clone());
                    }
                }
            }
        }
        if record.is_empty() {
            return Err(VariationalError::Backend {
                message: "operation sequence has no measurement".to_string(),
            });
        }
        Ok(record)
    }
}

/// Study whose value is the number of sites measured as 1, summed over
/// repetition rows.
#[derive(Debug, Clone)]
pub struct PopulationStudy {
    key: String,
}

impl PopulationStudy {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Study for PopulationStudy {
    fn value(&self, record: &MeasurementRecord) -> VariationalResult<f64> {
        let rows = record.outcomes(&self.key)?;
        Ok(rows.iter().flatten().map(|bit| f64::from(*bit)).sum())
    }
}

/// The population study under the `"all"` key with the cost-scaled noise
/// law attached.
pub fn noisy_population_study(seed: u64) -> NoisyStudy<PopulationStudy> {
    NoisyStudy::new(PopulationStudy::new("all"), seed)
}

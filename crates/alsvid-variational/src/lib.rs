//! Variational ansatz, study, and backend interfaces for Alsvid.
//!
//! This crate defines the collaborator contracts of a variational loop:
//! an [`Ansatz`] emits a parameterized operation sequence, a [`Backend`]
//! runs it and reports measurement outcomes, and a [`Study`] reduces the
//! outcomes to the scalar an optimizer minimizes. [`StudyBlackBox`] wires
//! the three together as an [`alsvid_optimize::BlackBox`].
//!
//! # Features
//!
//! - **Ansatz contract**: named ordered parameters, deterministic site
//!   layout, operation sequence ending in a tagged measurement
//! - **Measurement records**: 0/1 outcome rows keyed by measurement tag
//! - **Study reduction**: record-to-scalar with optional cost-scaled
//!   noise via `NoisyStudy`
//! - **Fixtures**: a two-site ansatz, a deterministic threshold backend,
//!   and a population-counting study under [`testing`]
//!
//! # Example
//!
//! ```
//! use alsvid_optimize::{OptimizationAlgorithm, RandomSearch};
//! use alsvid_variational::StudyBlackBox;
//! use alsvid_variational::testing::{PopulationStudy, ThresholdBackend, TwoSiteAnsatz};
//!
//! let mut objective = StudyBlackBox::new(
//!     TwoSiteAnsatz::new(),
//!     PopulationStudy::new("all"),
//!     ThresholdBackend::new(),
//! );
//! let result = RandomSearch::new(10)
//!     .with_seed(3)
//!     .optimize(&mut objective, Some(&[0.0, 0.0]), None)?;
//! assert_eq!(result.optimal_value, 0.0);
//! # Ok::<(), alsvid_optimize::OptimizeError>(())
//! ```

pub mod ansatz;
pub mod backend;
pub mod error;
pub mod study;
pub mod testing;

// Re-exports
pub use ansatz::{Ansatz, CircuitOp, SiteId, check_param_count};
pub use backend::{Backend, MeasurementRecord};
pub use error::{VariationalError, VariationalResult};
pub use study::{NoisyStudy, Study, StudyBlackBox};

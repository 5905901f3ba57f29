//! Black-box objective and optimization algorithm contracts for Alsvid.
//!
//! This crate defines the interface between an objective function whose
//! internals are opaque (a "black box") and the strategies that minimize
//! it, together with composable wrappers for cost-scaled noise and
//! evaluation accounting.
//!
//! # Features
//!
//! - **Black boxes**: `BlackBox` trait with exact and cost-aware
//!   evaluation paths plus statistical `noise_bounds`
//! - **Noise composition**: wrap any box in `Noisy` with a pluggable
//!   `NoiseModel` instead of reimplementing its objective
//! - **Accounting**: `Tracked` records every successful query, its cost,
//!   and optionally the query point
//! - **Strategies**: `OptimizationAlgorithm` trait, a production
//!   `RandomSearch`, and fixture objectives/strategies under [`testing`]
//!
//! # Example
//!
//! ```
//! use alsvid_optimize::{OptimizationAlgorithm, OptimizationStatus, RandomSearch};
//! use alsvid_optimize::testing::SumOfSquares;
//!
//! fn main() -> Result<(), alsvid_optimize::OptimizeError> {
//!     let mut objective = SumOfSquares::new();
//!     let search = RandomSearch::new(20).with_seed(7);
//!     let result = search.optimize(&mut objective, Some(&[0.5, -0.5]), None)?;
//!
//!     assert_eq!(result.status, OptimizationStatus::Success);
//!     assert!(result.optimal_value <= 0.5);
//!     Ok(())
//! }
//! ```

pub mod algorithm;
pub mod black_box;
pub mod error;
pub mod noise;
pub mod result;
pub mod search;
pub mod testing;
pub mod tracked;

// Re-exports
pub use algorithm::{BestSeen, OptimizationAlgorithm, validate_guesses};
pub use black_box::{BlackBox, check_cost, check_dimension};
pub use error::{OptimizeError, OptimizeResult};
pub use noise::{CostScaledGaussian, NoiseModel, Noisy};
pub use result::{OptimizationResult, OptimizationStatus};
pub use search::RandomSearch;
pub use tracked::{Evaluation, Tracked};

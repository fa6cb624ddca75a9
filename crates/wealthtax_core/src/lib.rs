//! Lifecycle wealth-tax optimization library
//!
//! This crate finds the utility-maximizing wealth trajectory for a two-period
//! lifecycle consumption/bequest model with a one-time proportional wealth
//! tax at the period boundary. It provides:
//! - The closed-form CRRA utility model with feasibility handling
//!   ([`utility`])
//! - A two-phase solver: global grid search plus deterministic Nelder-Mead
//!   refinement ([`optimization`])
//! - An LRU + TTL result cache keyed by coarse parameter fingerprints
//!   ([`cache`])
//! - Warm-start tracking that narrows the search when parameters change
//!   incrementally ([`warm_start`])
//! - Consumption/wealth path generators for rendering ([`trajectory`])
//! - A tax-effect sensitivity sweep ([`analysis`])
//!
//! # Example
//!
//! ```ignore
//! use wealthtax_core::{EconomicParameters, Session};
//!
//! let mut session = Session::new();
//! let result = session.find_optimal_wealth(&EconomicParameters::default())?;
//! println!("w1 = {:.4}, w2 = {:.4}", result.w1, result.w2);
//!
//! // Repeating the call is served from the cache:
//! assert!(session.find_optimal_wealth(&EconomicParameters::default())?.cache_hit);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod cache;
pub mod error;
pub mod optimization;
pub mod session;
pub mod trajectory;
pub mod utility;
pub mod warm_start;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ModelError, SolveError};
pub use model::{EconomicParameters, WealthPair};
pub use optimization::{Convergence, OptimizationResult, OptimizerConfig, SolveMethod};
pub use session::{InProcess, Session, SolveStrategy};

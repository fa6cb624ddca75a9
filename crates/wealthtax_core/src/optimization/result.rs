//! Solver result types.

use serde::{Deserialize, Serialize};

use crate::model::WealthPair;

/// How far the solve got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// Grid search plus an accepted local refinement
    Converged,
    /// Refinement was rejected or did not improve; grid argmax returned
    GridOnly,
}

/// Which phase produced the final point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    GridSearch,
    NelderMead,
}

/// Final result of one optimization call. Immutable once produced; every
/// numeric field is guaranteed finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Optimal wealth just before the tax event
    pub w1: f64,
    /// Optimal bequest
    pub w2: f64,
    /// Lifetime utility at the optimum
    pub utility: f64,
    /// Objective evaluations across both phases
    pub iterations: usize,
    pub convergence: Convergence,
    pub method: SolveMethod,
    /// Whether this result was served from the session cache
    pub cache_hit: bool,
}

impl OptimizationResult {
    /// The solution as a wealth pair.
    #[must_use]
    pub fn pair(&self) -> WealthPair {
        WealthPair {
            w1: self.w1,
            w2: self.w2,
        }
    }
}

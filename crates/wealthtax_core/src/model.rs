//! Value types for the two-period lifecycle model.
//!
//! A household accumulates wealth over a working period of `t1` years, pays a
//! one-time proportional wealth tax `tau` at the period boundary, consumes
//! over a retirement period of `t2` years, and leaves a bequest at end of
//! life. The solver searches over the two "hinge" wealth values: wealth just
//! before the tax event (`w1`) and wealth bequeathed at end of life (`w2`).

use serde::{Deserialize, Serialize};

/// Economic parameters for a single optimization call.
///
/// Treated as immutable once handed to the solver. Range and cross-field
/// validation (`r > rho`, `gamma > 0`, `eta > 0`, `0 <= tau < 1`,
/// `t1, t2 > 0`, `w0 > 0`) is the caller's responsibility; the core only
/// guards the preconditions that would make the math itself undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// Rate of return on wealth
    pub r: f64,
    /// Time-preference (impatience) rate
    pub rho: f64,
    /// Relative risk aversion over consumption
    pub gamma: f64,
    /// Relative risk aversion over the bequest
    pub eta: f64,
    /// Bequest weight
    pub beta: f64,
    /// Proportional wealth tax applied once at the period boundary
    pub tau: f64,
    /// Length of period 1 in years (start to tax event)
    pub t1: f64,
    /// Length of period 2 in years (tax event to end of life)
    pub t2: f64,
    /// Initial wealth
    pub w0: f64,
}

impl Default for EconomicParameters {
    /// Reference scenario used throughout the tests and benchmarks.
    fn default() -> Self {
        Self {
            r: 0.06,
            rho: 0.04,
            gamma: 0.7,
            eta: 1.7,
            beta: 3.0,
            tau: 0.0,
            t1: 20.0,
            t2: 25.0,
            w0: 1.0,
        }
    }
}

impl EconomicParameters {
    /// Same scenario with a different tax rate. Used by the tax sweep.
    #[must_use]
    pub fn with_tau(self, tau: f64) -> Self {
        Self { tau, ..self }
    }

    /// Maximum feasible pre-tax wealth at the period boundary: all of `w0`
    /// compounded for `t1` years with zero consumption.
    #[must_use]
    pub fn max_w1(&self) -> f64 {
        self.w0 * (self.r * self.t1).exp()
    }
}

/// A candidate or solution point in the two-dimensional search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WealthPair {
    /// Wealth just before the tax event
    pub w1: f64,
    /// Wealth bequeathed at end of life
    pub w2: f64,
}

/// One sample of a consumption or wealth path, for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Time in years from the start of the plan
    pub t: f64,
    /// Wealth level or consumption rate at `t`, depending on the generator
    pub value: f64,
}

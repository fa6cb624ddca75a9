//! Warm-start memory for incremental re-optimization.
//!
//! Remembers the last accepted solution and the parameters that produced it.
//! When the next call's parameters differ only incrementally (a slider drag,
//! not a scenario switch), the remembered pair seeds a narrower search box.
//! The hint only ever *biases* the search; it never skips or approximates
//! the computation.

use crate::model::{EconomicParameters, WealthPair};

/// Maximum relative difference, per parameter, for two parameter sets to
/// count as incremental variants of each other.
const SIMILARITY_THRESHOLD: f64 = 0.10;

/// Single-slot tracker, overwritten after every successful solve.
#[derive(Debug, Clone, Default)]
pub struct WarmStartTracker {
    last: Option<(WealthPair, EconomicParameters)>,
}

impl WarmStartTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered solution, but only when `params` are similar to the
    /// parameters that produced it. Whether the pair is still feasible under
    /// `params` is checked later, at box-determination time.
    #[must_use]
    pub fn hint_for(&self, params: &EconomicParameters) -> Option<WealthPair> {
        self.last
            .as_ref()
            .and_then(|(pair, prev)| similar(prev, params).then_some(*pair))
    }

    /// Record a freshly computed solution. Cache hits must not be recorded:
    /// no new search occurred.
    pub fn update(&mut self, pair: WealthPair, params: EconomicParameters) {
        self.last = Some((pair, params));
    }

    /// Discard learned history (e.g. user reset to defaults).
    pub fn clear(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn last_solution(&self) -> Option<WealthPair> {
        self.last.as_ref().map(|(pair, _)| *pair)
    }
}

/// True iff every preference/tax parameter differs by at most 10% in
/// relative terms. Horizons and initial wealth are excluded: changing them
/// moves the feasible region itself, which the constraint re-check at box
/// determination handles.
#[must_use]
pub fn similar(a: &EconomicParameters, b: &EconomicParameters) -> bool {
    [
        (a.r, b.r),
        (a.rho, b.rho),
        (a.gamma, b.gamma),
        (a.eta, b.eta),
        (a.beta, b.beta),
        (a.tau, b.tau),
    ]
    .into_iter()
    .all(|(x, y)| relative_close(x, y))
}

fn relative_close(x: f64, y: f64) -> bool {
    if x == y {
        // Covers tau == 0 on both sides, where the ratio is 0/0.
        return true;
    }
    (x - y).abs() / x.abs().max(y.abs()) <= SIMILARITY_THRESHOLD
}

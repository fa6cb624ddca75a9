//! Session context threading cache and warm-start state through calls.
//!
//! The cache and the warm-start tracker are the only stateful pieces of the
//! system. Instead of module-level singletons they live in an explicit
//! [`Session`] owned by the caller: confinement to one thread (or one
//! thread-local copy per worker) falls out of `&mut self`, and tests get a
//! fresh session for free.

use std::time::Duration;

use tracing::debug;

use crate::cache::{ResultCache, fingerprint};
use crate::error::SolveError;
use crate::model::{EconomicParameters, WealthPair};
use crate::optimization::{self, OptimizationResult, OptimizerConfig};
use crate::warm_start::WarmStartTracker;

/// Pluggable execution strategy for one solve.
///
/// The solver itself is a pure function of its inputs, so a strategy is free
/// to run it on the calling thread (the default), or ship the inputs to a
/// worker with a bounded timeout and fall back to in-process execution on
/// failure. Implementations must return the result of the *identical*
/// computation; the session layers caching and warm-start state on top.
pub trait SolveStrategy {
    fn solve(
        &self,
        params: &EconomicParameters,
        config: &OptimizerConfig,
        hint: Option<WealthPair>,
    ) -> Result<OptimizationResult, SolveError>;
}

/// Default strategy: run synchronously on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcess;

impl SolveStrategy for InProcess {
    fn solve(
        &self,
        params: &EconomicParameters,
        config: &OptimizerConfig,
        hint: Option<WealthPair>,
    ) -> Result<OptimizationResult, SolveError> {
        optimization::solve(params, config, hint)
    }
}

/// One user session: optimizer configuration, result cache, and warm-start
/// memory. Not thread-safe by design; give each thread its own session.
pub struct Session {
    config: OptimizerConfig,
    cache: ResultCache,
    warm_start: WarmStartTracker,
    strategy: Box<dyn SolveStrategy>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            config,
            cache: ResultCache::new(),
            warm_start: WarmStartTracker::new(),
            strategy: Box::new(InProcess),
        }
    }

    /// Override the cache bounds. Mainly for tests and long-lived embeddings.
    #[must_use]
    pub fn with_cache_limits(mut self, capacity: usize, ttl: Duration) -> Self {
        self.cache = ResultCache::with_limits(capacity, ttl);
        self
    }

    /// Swap in a different execution strategy (e.g. an off-thread worker).
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn SolveStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Find the utility-maximizing wealth pair for `params`.
    ///
    /// Control flow: fingerprint -> cache lookup (a hit is returned with
    /// `cache_hit = true` and does *not* touch the warm-start tracker) ->
    /// solve with a warm-start hint when available -> cache insert and
    /// warm-start update.
    ///
    /// # Errors
    /// Propagates [`SolveError`] from the solver; on error neither the cache
    /// nor the warm-start state is modified.
    pub fn find_optimal_wealth(
        &mut self,
        params: &EconomicParameters,
    ) -> Result<OptimizationResult, SolveError> {
        let key = fingerprint(params);

        if let Some(mut result) = self.cache.get(&key) {
            debug!(%key, "serving cached result");
            result.cache_hit = true;
            return Ok(result);
        }

        let hint = self.warm_start.hint_for(params);
        let result = self.strategy.solve(params, &self.config, hint)?;
        debug!(
            %key,
            w1 = result.w1,
            w2 = result.w2,
            warm = hint.is_some(),
            "solved"
        );

        self.cache.put(key, result);
        self.warm_start.update(result.pair(), *params);
        Ok(result)
    }

    /// Discard all learned history: cached results and the warm-start slot.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.warm_start.clear();
    }

    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Last freshly computed solution, if any.
    #[must_use]
    pub fn last_solution(&self) -> Option<WealthPair> {
        self.warm_start.last_solution()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

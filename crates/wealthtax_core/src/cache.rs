//! LRU + TTL cache of optimization results.
//!
//! Keys are deliberately coarse fingerprints of the parameter set (every
//! field rounded to three decimal places) so that the micro-movements of a
//! dragged slider collide on the same entry. The cache is a pure performance
//! optimization: every entry is reproducible by recomputation, and nothing
//! downstream may depend on its contents.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::model::EconomicParameters;
use crate::optimization::OptimizationResult;

pub const DEFAULT_CAPACITY: usize = 100;
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Canonical cache key for a parameter set.
#[must_use]
pub fn fingerprint(params: &EconomicParameters) -> String {
    format!(
        "{:.3}|{:.3}|{:.3}|{:.3}|{:.3}|{:.3}|{:.3}|{:.3}|{:.3}",
        params.r,
        params.rho,
        params.gamma,
        params.eta,
        params.beta,
        params.tau,
        params.t1,
        params.t2,
        params.w0
    )
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: OptimizationResult,
    inserted_at: Instant,
}

/// Bounded cache with least-recently-used eviction on insert and
/// time-to-live expiry on read.
#[derive(Debug)]
pub struct ResultCache {
    entries: FxHashMap<String, CacheEntry>,
    /// Recency order, least recently used first
    order: Vec<String>,
    capacity: usize,
    ttl: Duration,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    #[must_use]
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Look up a key. An entry older than the TTL is evicted and reported as
    /// a miss; a live entry is marked most-recently-used and returned by
    /// value.
    pub fn get(&mut self, key: &str) -> Option<OptimizationResult> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => entry.inserted_at.elapsed() > self.ttl,
        };

        if expired {
            self.entries.remove(key);
            self.order.retain(|k| k != key);
            trace!(key, "cache entry expired");
            return None;
        }

        self.touch(key);
        self.entries.get(key).map(|entry| entry.result)
    }

    /// Insert a result, evicting the least-recently-used entry first when at
    /// capacity. Re-inserting an existing key refreshes both its value and
    /// its timestamp.
    pub fn put(&mut self, key: String, result: OptimizationResult) {
        if self.entries.contains_key(&key) {
            self.order.retain(|k| k != &key);
        } else if self.entries.len() >= self.capacity && !self.order.is_empty() {
            let evicted = self.order.remove(0);
            self.entries.remove(&evicted);
            trace!(key = %evicted, "evicted least-recently-used entry");
        }

        self.order.push(key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                result,
                inserted_at: Instant::now(),
            },
        );
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(pos);
            self.order.push(key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{Convergence, SolveMethod};

    fn dummy_result(w1: f64) -> OptimizationResult {
        OptimizationResult {
            w1,
            w2: 1.0,
            utility: -10.0,
            iterations: 42,
            convergence: Convergence::Converged,
            method: SolveMethod::NelderMead,
            cache_hit: false,
        }
    }

    #[test]
    fn fingerprint_collides_on_slider_micro_movements() {
        let a = EconomicParameters::default();
        let b = EconomicParameters {
            r: a.r + 0.0001,
            ..a
        };
        let c = EconomicParameters { r: a.r + 0.01, ..a };

        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&a), fingerprint(&c));
    }

    #[test]
    fn get_returns_stored_value_and_marks_recency() {
        let mut cache = ResultCache::with_limits(2, DEFAULT_TTL);
        cache.put("a".into(), dummy_result(1.0));
        cache.put("b".into(), dummy_result(2.0));

        // Touch "a" so that "b" becomes the eviction candidate.
        assert_eq!(cache.get("a").unwrap().w1, 1.0);
        cache.put("c".into(), dummy_result(3.0));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn capacity_overflow_evicts_least_recently_used() {
        let mut cache = ResultCache::with_limits(2, DEFAULT_TTL);
        cache.put("a".into(), dummy_result(1.0));
        cache.put("b".into(), dummy_result(2.0));
        cache.put("c".into(), dummy_result(3.0));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut cache = ResultCache::with_limits(4, Duration::from_millis(5));
        cache.put("a".into(), dummy_result(1.0));
        assert!(cache.get("a").is_some());

        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn reinsert_refreshes_value() {
        let mut cache = ResultCache::with_limits(2, DEFAULT_TTL);
        cache.put("a".into(), dummy_result(1.0));
        cache.put("a".into(), dummy_result(9.0));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap().w1, 9.0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = ResultCache::new();
        cache.put("a".into(), dummy_result(1.0));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }
}

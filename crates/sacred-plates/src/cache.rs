//! Rendered plate cache.
//!
//! Memoizes documents by key for the cache's lifetime. No eviction: the
//! key space is the catalog times the variants, so it stays small.
//!
//! Each key owns a [`OnceLock`] cell. The map lock is held only long enough
//! to find or insert the cell; computing happens on the cell, so concurrent
//! callers for one key wait for the first caller's result while other keys
//! proceed independently.
//!
//! ## Rust Lesson #5: OnceLock
//!
//! `OnceLock::get_or_init` runs its closure at most once. Every other
//! caller blocks until that value exists and then borrows it. Wrapping the
//! cell in an `Arc` lets us clone it out of the map and drop the map lock
//! before computing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::debug;

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total lookups
    pub lookups: u64,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the compute function
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

/// Process-lifetime map from key to rendered document.
#[derive(Debug, Default)]
pub struct PlateCache {
    cells: Mutex<HashMap<String, Arc<OnceLock<String>>>>,
    lookups: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a slug and variant name: `slug-variant`.
    pub fn key(slug: &str, variant: &str) -> String {
        format!("{}-{}", slug, variant)
    }

    /// Return the cached value for `key`, computing it first if needed.
    ///
    /// `compute` runs at most once per key. If it panics the cell stays
    /// empty and the next caller computes again.
    pub fn get_or_create<F>(&self, key: &str, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let cell = {
            let mut cells = self.lock();
            match cells.get(key) {
                Some(cell) => Arc::clone(cell),
                None => {
                    let cell = Arc::new(OnceLock::new());
                    cells.insert(key.to_string(), Arc::clone(&cell));
                    cell
                }
            }
        };

        let mut computed = false;
        let value = cell.get_or_init(|| {
            computed = true;
            compute()
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key, "plate cache miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key, "plate cache hit");
        }
        value.clone()
    }

    /// Cached value for `key`, without computing.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).and_then(|cell| cell.get().cloned())
    }

    /// True once a value for `key` has been stored.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().get(key).is_some_and(|cell| cell.get().is_some())
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookups: self.lookups.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    // The map is never left half-updated, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<OnceLock<String>>>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn computes_once_per_key() {
        let cache = PlateCache::new();
        let mut calls = 0;
        let first = cache.get_or_create("a-thumbnail", || {
            calls += 1;
            "<svg/>".to_string()
        });
        let second = cache.get_or_create("a-thumbnail", || {
            calls += 1;
            "different".to_string()
        });
        assert_eq!(first, second);
        assert_eq!(calls, 1);
        assert_eq!(cache.stats(), CacheStats { lookups: 2, hits: 1, misses: 1 });
        assert_eq!(cache.stats().hit_rate(), 0.5);
    }

    #[test]
    fn keys_are_independent() {
        let cache = PlateCache::new();
        cache.get_or_create(&PlateCache::key("torus", "thumbnail"), || "t".into());
        cache.get_or_create(&PlateCache::key("torus", "full"), || "f".into());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("torus-thumbnail").as_deref(), Some("t"));
        assert_eq!(cache.get("torus-full").as_deref(), Some("f"));
        assert!(!cache.contains("hexagram-full"));
    }

    #[test]
    fn fresh_cache_is_empty() {
        let cache = PlateCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hit_rate(), 0.0);
        assert_eq!(cache.get("anything"), None);
    }

    #[test]
    fn concurrent_callers_share_one_computation() {
        let cache = Arc::new(PlateCache::new());
        let calls = Arc::new(AtomicU64::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_or_create("flower-of-life-full", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(std::time::Duration::from_millis(20));
                        "plate".to_string()
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "plate");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let stats = cache.stats();
        assert_eq!(stats.lookups, 8);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 7);
    }
}

//! Cache Store Module
//!
//! Fibonacci result cache: an [`LruCache`] keyed by variant and order, plus
//! hit/miss/eviction accounting.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, LruCache};
use crate::fibonacci::{FibValue, Variant};

/// Cache handle shared by all request handlers.
pub type SharedCache = Arc<Mutex<CacheStore>>;

// == Cache Key ==
/// Identifies one cached result. Each variant has its own key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub variant: Variant,
    pub order: u64,
}

impl CacheKey {
    pub fn new(variant: Variant, order: u64) -> Self {
        Self { variant, order }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.variant, self.order)
    }
}

// == Cache Store ==
/// Bounded Fibonacci result store with LRU eviction.
#[derive(Debug)]
pub struct CacheStore {
    entries: LruCache<CacheKey, FibValue>,
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` results.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::new(capacity.get()),
        }
    }

    /// Wraps the store for sharing across request handlers.
    pub fn into_shared(self) -> SharedCache {
        Arc::new(Mutex::new(self))
    }

    // == Get ==
    /// Looks up a result, refreshing its recency on a hit.
    pub fn get(&mut self, key: &CacheKey) -> Option<FibValue> {
        match self.entries.get(key).copied() {
            Some(value) => {
                self.stats.record_hit();
                debug!("Cache hit for {}", key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                debug!("Cache miss for {}", key);
                None
            }
        }
    }

    // == Put ==
    /// Stores a result, evicting the least recently used one when full.
    pub fn put(&mut self, key: CacheKey, value: FibValue) {
        if let Some((evicted, _)) = self.entries.put(key, value) {
            self.stats.record_eviction();
            debug!("Evicted {} to make room for {}", evicted, key);
        }
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Checks for a key without touching recency or statistics.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains(key)
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Cached keys from most to least recently used.
    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

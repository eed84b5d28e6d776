//! Caching Proxy Module
//!
//! Serves Fibonacci requests from the LRU cache, falling back to the origin
//! on a miss and populating the cache with what the origin returns.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CacheKey, CacheStore, SharedCache};
use crate::error::Result;
use crate::fibonacci::Variant;
use crate::models::{parse_order, CachedFibonacciResponse};
use crate::origin::Origin;

// == Caching Proxy ==
/// Cache-first request handler in front of an [`Origin`].
///
/// The proxy is the only owner of the cache. The cache lock is held for the
/// lookup and for the insert, never across the origin fetch, so concurrent
/// misses on the same key may both reach the origin; the last insert wins.
pub struct CachingProxy {
    cache: SharedCache,
    origin: Arc<dyn Origin>,
}

impl CachingProxy {
    pub fn new(cache: CacheStore, origin: Arc<dyn Origin>) -> Self {
        Self {
            cache: cache.into_shared(),
            origin,
        }
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Handle ==
    /// Validates the raw `order` parameter, then serves it.
    ///
    /// Invalid input is rejected before the cache or the origin is touched.
    pub async fn handle(
        &self,
        raw_order: Option<&str>,
        variant: Variant,
    ) -> Result<CachedFibonacciResponse> {
        let order = parse_order(raw_order)?;
        self.serve(order, variant).await
    }

    // == Serve ==
    /// Answers from the cache, or fetches from the origin and caches the result.
    ///
    /// An origin failure leaves the cache unmodified for this key.
    pub async fn serve(&self, order: u64, variant: Variant) -> Result<CachedFibonacciResponse> {
        let key = CacheKey::new(variant, order);

        let cached = self.cache.lock().await.get(&key);
        if let Some(value) = cached {
            return Ok(CachedFibonacciResponse::hit(order, value));
        }

        let value = match self.origin.fetch(order, variant).await {
            Ok(value) => value,
            Err(err) => {
                warn!("Origin fetch for {} failed: {}", key, err);
                return Err(err.into());
            }
        };

        self.cache.lock().await.put(key, value);
        debug!("Cached {} from origin", key);

        Ok(CachedFibonacciResponse::miss(order, value))
    }
}

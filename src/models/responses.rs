//! Response DTOs for the proxy and the origin service
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, CacheStats};
use crate::fibonacci::FibValue;

/// Origin response body, also what the proxy's client decodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciResponse {
    /// The requested order
    pub order: u64,
    /// Fibonacci value for that order
    pub value: FibValue,
}

impl FibonacciResponse {
    pub fn new(order: u64, value: FibValue) -> Self {
        Self { order, value }
    }
}

/// Proxy response body for both Fibonacci routes
///
/// `cached` reports whether this particular request was served from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFibonacciResponse {
    pub order: u64,
    pub value: FibValue,
    pub cached: bool,
}

impl CachedFibonacciResponse {
    pub fn hit(order: u64, value: FibValue) -> Self {
        Self {
            order,
            value,
            cached: true,
        }
    }

    pub fn miss(order: u64, value: FibValue) -> Self {
        Self {
            order,
            value,
            cached: false,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured cache capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Cached keys as `variant:order`, most recently used first
    pub cached_keys: Vec<String>,
}

impl StatsResponse {
    pub fn new(stats: CacheStats, keys: &[CacheKey]) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            cached_keys: keys.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

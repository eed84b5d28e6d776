//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_CAPACITY;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of results the proxy cache holds
    pub cache_capacity: NonZeroUsize,
    /// Proxy HTTP port
    pub server_port: u16,
    /// Base URL of the origin service, without a trailing route
    pub origin_url: String,
    /// Upper bound on a single origin request, in milliseconds
    pub origin_timeout_ms: u64,
    /// Origin service HTTP port
    pub origin_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Proxy cache capacity, must be non-zero (default: 5)
    /// - `SERVER_PORT` - Proxy HTTP port (default: 8081)
    /// - `ORIGIN_URL` - Origin base URL (default: http://fibonacci-api:8080)
    /// - `ORIGIN_TIMEOUT_MS` - Origin request timeout (default: 5000)
    /// - `ORIGIN_PORT` - Origin service HTTP port (default: 8080)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            origin_url: env::var("ORIGIN_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.origin_url),
            origin_timeout_ms: parse_var("ORIGIN_TIMEOUT_MS").unwrap_or(defaults.origin_timeout_ms),
            origin_port: parse_var("ORIGIN_PORT").unwrap_or(defaults.origin_port),
        }
    }

    pub fn origin_timeout(&self) -> Duration {
        Duration::from_millis(self.origin_timeout_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 8081,
            origin_url: "http://fibonacci-api:8080".to_string(),
            origin_timeout_ms: 5000,
            origin_port: 8080,
        }
    }
}

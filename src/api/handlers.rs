//! API Handlers
//!
//! HTTP request handlers for each caching proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::info;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{OriginError, Result};
use crate::fibonacci::Variant;
use crate::models::{CachedFibonacciResponse, HealthResponse, OrderQuery, StatsResponse};
use crate::origin::{HttpOrigin, Origin};
use crate::proxy::CachingProxy;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<CachingProxy>,
}

impl AppState {
    /// Creates a new AppState around the given cache and origin.
    pub fn new(cache: CacheStore, origin: Arc<dyn Origin>) -> Self {
        Self {
            proxy: Arc::new(CachingProxy::new(cache, origin)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds an HTTP origin client for `origin_url` and an empty cache of
    /// `cache_capacity` entries.
    pub fn from_config(config: &Config) -> std::result::Result<Self, OriginError> {
        let origin = HttpOrigin::new(config.origin_url.clone(), config.origin_timeout())?;
        info!("Origin client targeting {}", origin.base_url());
        let cache = CacheStore::new(config.cache_capacity);
        Ok(Self::new(cache, Arc::new(origin)))
    }
}

/// Handler for GET /fibonacci
pub async fn fibonacci_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<CachedFibonacciResponse>> {
    let Query(query) = query?;
    let response = state
        .proxy
        .handle(query.order.as_deref(), Variant::Iterative)
        .await?;
    Ok(Json(response))
}

/// Handler for GET /recursive-fibonacci
pub async fn recursive_fibonacci_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<CachedFibonacciResponse>> {
    let Query(query) = query?;
    let response = state
        .proxy
        .handle(query.order.as_deref(), Variant::Recursive)
        .await?;
    Ok(Json(response))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.proxy.cache().lock().await;
    Json(StatsResponse::new(cache.stats(), &cache.keys()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

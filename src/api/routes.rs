//! API Routes
//!
//! Configures the Axum router with all caching proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    fibonacci_handler, health_handler, recursive_fibonacci_handler, stats_handler, AppState,
};
use crate::fibonacci::Variant;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /fibonacci?order=N` - Iterative origin route, cached
/// - `GET /recursive-fibonacci?order=N` - Recursive origin route, cached
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(Variant::Iterative.route(), get(fibonacci_handler))
        .route(Variant::Recursive.route(), get(recursive_fibonacci_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

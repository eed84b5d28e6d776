//! Origin Service Routes
//!
//! Router and handlers for the Fibonacci compute service the proxy sits in
//! front of.

use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::fibonacci::Variant;
use crate::models::{FibonacciResponse, HealthResponse, OrderQuery};

/// Creates the origin router with one route per variant plus `/health`.
pub fn create_origin_router() -> Router {
    Router::new()
        .route(Variant::Iterative.route(), get(iterative_handler))
        .route(Variant::Recursive.route(), get(recursive_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Handler for GET /fibonacci
async fn iterative_handler(
    query: std::result::Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<FibonacciResponse>> {
    let Query(query) = query?;
    compute(&query, Variant::Iterative)
}

/// Handler for GET /recursive-fibonacci
async fn recursive_handler(
    query: std::result::Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<FibonacciResponse>> {
    let Query(query) = query?;
    compute(&query, Variant::Recursive)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn compute(query: &OrderQuery, variant: Variant) -> Result<Json<FibonacciResponse>> {
    let order = query.order()?;
    info!("Calculating Fibonacci ({}) for order {}", variant, order);

    let value = variant.compute(order).ok_or_else(|| {
        ServiceError::InvalidInput(format!("Order {} is out of range", order))
    })?;

    Ok(Json(FibonacciResponse::new(order, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn get_uri(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = create_origin_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_iterative_route() {
        let (status, json) = get_uri("/fibonacci?order=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["order"], 10);
        assert_eq!(json["value"], 55);
    }

    #[tokio::test]
    async fn test_recursive_route() {
        let (status, json) = get_uri("/recursive-fibonacci?order=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["value"], 3);
    }

    #[tokio::test]
    async fn test_invalid_order() {
        for uri in [
            "/fibonacci",
            "/fibonacci?order=0",
            "/fibonacci?order=-3",
            "/recursive-fibonacci?order=abc",
        ] {
            let (status, json) = get_uri(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(json["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_repeated_order_is_json_bad_request() {
        for uri in ["/fibonacci?order=1&order=2", "/recursive-fibonacci?order=1&order=2"] {
            let (status, json) = get_uri(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(json["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_uri("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }
}

//! Integration Tests for the Caching Proxy
//!
//! Runs the origin service on an ephemeral port and drives the proxy router
//! through a real HTTP origin client.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fib_cache::{
    api::create_router, cache::CacheStore, models::ErrorResponse, origin::create_origin_router,
    origin::HttpOrigin, AppState,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

// == Helper Functions ==

async fn spawn_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_origin_router()).await.unwrap();
    });
    format!("http://{}", addr)
}

fn create_proxy(origin_url: &str, capacity: usize) -> Router {
    let origin = HttpOrigin::new(origin_url, Duration::from_secs(2)).unwrap();
    let cache = CacheStore::new(NonZeroUsize::new(capacity).unwrap());
    create_router(AppState::new(cache, Arc::new(origin)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Miss Then Hit ==

#[tokio::test]
async fn test_order_ten_miss_then_hit() {
    let app = create_proxy(&spawn_origin().await, 5);

    let (status, json) = get(&app, "/fibonacci?order=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["order"], 10);
    assert_eq!(json["value"], 55);
    assert_eq!(json["cached"], false);

    let (status, json) = get(&app, "/fibonacci?order=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["order"], 10);
    assert_eq!(json["value"], 55);
    assert_eq!(json["cached"], true);
}

#[tokio::test]
async fn test_recursive_route_through_proxy() {
    let app = create_proxy(&spawn_origin().await, 5);

    let (status, json) = get(&app, "/recursive-fibonacci?order=30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 832040);
    assert_eq!(json["cached"], false);

    // Same order on the other route is its own cache entry.
    let (_, json) = get(&app, "/fibonacci?order=30").await;
    assert_eq!(json["value"], 832040);
    assert_eq!(json["cached"], false);

    let (_, json) = get(&app, "/recursive-fibonacci?order=30").await;
    assert_eq!(json["cached"], true);
}

// == Eviction ==

#[tokio::test]
async fn test_least_recently_used_is_evicted() {
    let app = create_proxy(&spawn_origin().await, 2);

    get(&app, "/fibonacci?order=1").await;
    get(&app, "/fibonacci?order=2").await;
    let (_, json) = get(&app, "/fibonacci?order=1").await;
    assert_eq!(json["cached"], true);
    get(&app, "/fibonacci?order=3").await;

    let (_, json) = get(&app, "/fibonacci?order=1").await;
    assert_eq!(json["cached"], true, "order 1 was refreshed and must survive");
    let (_, json) = get(&app, "/fibonacci?order=2").await;
    assert_eq!(json["cached"], false, "order 2 was least recently used");

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["capacity"], 2);
    assert_eq!(stats["total_entries"], 2);
    assert_eq!(stats["evictions"], 2);
    assert_eq!(
        stats["cached_keys"],
        serde_json::json!(["fibonacci:2", "fibonacci:1"])
    );
}

// == Invalid Input ==

#[tokio::test]
async fn test_invalid_orders_are_rejected_without_caching() {
    let app = create_proxy(&spawn_origin().await, 5);

    for uri in [
        "/fibonacci?order=0",
        "/fibonacci?order=-3",
        "/fibonacci?order=abc",
        "/fibonacci",
        "/recursive-fibonacci?order=",
        "/fibonacci?order=1&order=2",
    ] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        let error: ErrorResponse = serde_json::from_value(json).unwrap();
        assert!(!error.error.is_empty());
    }

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["total_entries"], 0);
}

// == Origin Failure ==

#[tokio::test]
async fn test_unreachable_origin_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = create_proxy(&format!("http://{}", addr), 5);

    let (status, json) = get(&app, "/fibonacci?order=7").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].is_string());

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["total_entries"], 0);
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_proxy("http://127.0.0.1:9", 5);

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

//! Fib Origin - Fibonacci compute service
//!
//! The upstream the caching proxy fetches from. Serves the iterative and the
//! memoized recursive algorithms on separate routes.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fib_cache::{origin::create_origin_router, shutdown_signal, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fib_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.origin_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Fibonacci origin listening on http://{}", addr);

    axum::serve(listener, create_origin_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Origin shutdown complete");
    Ok(())
}

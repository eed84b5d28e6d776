//! Origin Module
//!
//! The upstream Fibonacci compute service: the [`Origin`] seam the proxy
//! fetches through, its HTTP client, and the service's own router.
//!
//! # Endpoints (origin service)
//! - `GET /fibonacci?order=N` - Iterative algorithm
//! - `GET /recursive-fibonacci?order=N` - Memoized recursive algorithm
//! - `GET /health` - Health check endpoint

mod client;
mod server;

pub use client::HttpOrigin;
pub use server::create_origin_router;

use async_trait::async_trait;

use crate::error::OriginError;
use crate::fibonacci::{FibValue, Variant};

/// Source of Fibonacci values behind the cache.
#[async_trait]
pub trait Origin: Send + Sync {
    /// Fetches the value for `order` from the route `variant` selects.
    async fn fetch(&self, order: u64, variant: Variant) -> Result<FibValue, OriginError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// In-process origin that counts calls and can be switched to failing.
    #[derive(Debug, Default)]
    pub struct StubOrigin {
        calls: AtomicUsize,
        failing: AtomicBool,
        delay: Option<Duration>,
    }

    impl StubOrigin {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let origin = Self::default();
            origin.set_failing(true);
            origin
        }

        pub fn with_delay(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::default()
            }
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Origin for StubOrigin {
        async fn fetch(&self, order: u64, variant: Variant) -> Result<FibValue, OriginError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(OriginError::Status(503));
            }
            variant
                .compute(order)
                .ok_or_else(|| OriginError::Payload(format!("no value for order {}", order)))
        }
    }
}

//! Fib Cache - An LRU caching proxy for a Fibonacci origin service
//!
//! Memoizes origin results in a bounded least-recently-used cache and serves
//! repeated requests without going back to the origin.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fibonacci;
pub mod models;
pub mod origin;
pub mod proxy;
pub mod shutdown;

pub use api::AppState;
pub use config::Config;
pub use proxy::CachingProxy;
pub use shutdown::shutdown_signal;

//! API Module
//!
//! HTTP handlers and routing for the caching proxy.
//!
//! # Endpoints
//! - `GET /fibonacci?order=N` - Iterative Fibonacci, served through the cache
//! - `GET /recursive-fibonacci?order=N` - Recursive Fibonacci, served through the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

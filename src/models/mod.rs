//! Request and Response models
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies of both the
//! proxy and the origin service.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_order, OrderQuery};
pub use responses::{
    CachedFibonacciResponse, ErrorResponse, FibonacciResponse, HealthResponse, StatsResponse,
};

//! HTTP middleware for request processing.

pub mod audit;
pub mod tracing;

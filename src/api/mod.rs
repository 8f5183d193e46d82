//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into service calls, validates input and maps
//! [`crate::error::AppError`] to status codes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

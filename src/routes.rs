//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service descriptor
//! - `GET  /health`        - Health check: store, audit queue
//! - `POST /shorten`       - Create a short link
//! - `GET  /stats/{code}`  - Link statistics
//! - `GET  /{code}`        - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Audit** - Error responses reported to the audit log
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::{audit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing and audit middleware, without path normalization.
///
/// Static segments (`/health`, `/shorten`, `/stats/...`) take precedence over
/// the `/{code}` capture, so those names can never be issued as shortcodes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::routes())
        .layer(middleware::from_fn_with_state(state.clone(), audit::layer))
        .with_state(state)
        .layer(tracing::layer())
}

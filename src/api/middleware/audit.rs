//! Audit reporting of failed requests.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ErrorMessage;
use crate::infrastructure::audit::Package;
use crate::state::AppState;

/// Sends an `error` audit entry for every response built from an
/// [`crate::error::AppError`].
///
/// # Example Entry
///
/// ```text
/// level=error package=handler message="Request failed with 404 Not Found: Shortcode not found"
/// ```
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if let Some(ErrorMessage(message)) = response.extensions().get::<ErrorMessage>() {
        state.audit.error(
            Package::Handler,
            format!("Request failed with {}: {}", response.status(), message),
        );
    }

    response
}

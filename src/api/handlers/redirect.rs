//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::application::services::Visit;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// A successful visit records one click before the redirect is returned. The
/// click carries the `Referer` header (decoded lossily if it is not UTF-8, or
/// `"direct"` when absent) and the coarse location of the peer address.
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 410 Gone if the link has expired
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let visit = Visit {
        referer: headers
            .get(header::REFERER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
        client_ip: Some(addr.ip()),
    };

    let target = state.redirect_service.resolve(&code, visit).await?;

    Ok(Redirect::temporary(&target))
}

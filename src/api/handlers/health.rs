//! Handlers for health check and service description.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CheckStatus, EndpointInfo, HealthChecks, HealthResponse, ServiceInfo,
};
use crate::domain::repositories::LinkRepository;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Reports the number of stored links
/// 2. **Audit Queue**: Checks the delivery worker is still running
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let audit_check = check_audit_queue(&state);

    let all_healthy = store_check.status == "ok" && audit_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            audit_queue: audit_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.store.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} links stored", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}

fn check_audit_queue(state: &AppState) -> CheckStatus {
    if !state.audit.is_forwarding() {
        return CheckStatus {
            status: "ok".to_string(),
            message: Some("Collector disabled, logging locally".to_string()),
        };
    }

    if state.audit.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Audit queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: state
                .audit
                .capacity()
                .map(|capacity| format!("Capacity: {}", capacity)),
        }
    }
}

/// Describes the service and its public endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "URL Shortener",
        status: "running",
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/shorten",
            },
            EndpointInfo {
                method: "GET",
                path: "/{shortcode}",
            },
            EndpointInfo {
                method: "GET",
                path: "/stats/{shortcode}",
            },
        ],
    })
}

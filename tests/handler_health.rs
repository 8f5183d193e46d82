mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::{health_handler, root_handler};
use snaplink::application::services::ShortenerSettings;
use snaplink::domain::clock::SystemClock;
use snaplink::infrastructure::audit::{AuditLogger, Stack};
use snaplink::infrastructure::geo::StaticGeoResolver;
use snaplink::infrastructure::persistence::InMemoryStore;
use snaplink::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn state_with_audit(audit: AuditLogger) -> AppState {
    AppState::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(SystemClock),
        Arc::new(StaticGeoResolver::default()),
        audit,
        ShortenerSettings::default(),
    )
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "health1", "https://example.com", None).await;
    let server = server(ctx.state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 links stored");
    assert_eq!(json["checks"]["audit_queue"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_with_open_audit_queue() {
    let (tx, _rx) = mpsc::channel(16);
    let server = server(state_with_audit(AuditLogger::new(Stack::Backend, tx)));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["audit_queue"]["message"], "Capacity: 16");
}

#[tokio::test]
async fn test_health_degraded_when_audit_worker_stopped() {
    let (tx, rx) = mpsc::channel(16);
    drop(rx);
    let server = server(state_with_audit(AuditLogger::new(Stack::Backend, tx)));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["audit_queue"]["status"], "error");
}

#[tokio::test]
async fn test_root_describes_service() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["service"], "URL Shortener");
    assert_eq!(json["status"], "running");

    let endpoints = json["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 3);
    assert!(
        endpoints
            .iter()
            .any(|e| e["method"] == "POST" && e["path"] == "/shorten")
    );
}

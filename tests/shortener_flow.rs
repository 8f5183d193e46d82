mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::TimeDelta;
use common::MockConnectInfoLayer;
use serde_json::json;
use snaplink::infrastructure::audit::{AuditLogger, Level, Package, Stack};
use snaplink::routes::router;
use tokio::sync::mpsc;

fn server(ctx: &common::TestContext) -> TestServer {
    let app = router(ctx.state.clone()).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_visit_expire_and_inspect() {
    let ctx = common::create_test_state();
    let server = server(&ctx);

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com/landing",
            "validity": 1,
            "shortcode": "promo1"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["shortlink"],
        "http://short.test/promo1"
    );

    let response = server
        .get("/promo1")
        .add_header("Referer", "https://mail.example.com")
        .await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/landing");

    ctx.clock.advance(TimeDelta::seconds(61));

    let response = server.get("/promo1").await;
    assert_eq!(response.status_code(), 410);

    let response = server.get("/stats/promo1").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["click_count"], 1);
    assert_eq!(json["created_at"], "2025-01-01T12:00:00Z");
    assert_eq!(json["expiry"], "2025-01-01T12:01:00Z");

    let clicks = json["clicks"].as_array().unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0]["source"], "https://mail.example.com");
}

#[tokio::test]
async fn test_generated_shortlink_redirects() {
    let ctx = common::create_test_state();
    let server = server(&ctx);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/generated" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["shortlink"]
        .as_str()
        .unwrap()
        .trim_start_matches(common::TEST_BASE_URL)
        .to_string();

    let response = server.get(&format!("/{code}")).await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/generated");
}

#[tokio::test]
async fn test_fixed_routes_are_not_shortcodes() {
    let ctx = common::create_test_state();
    let server = server(&ctx);

    server.get("/health").await.assert_status_ok();
    server.get("/").await.assert_status_ok();

    let response = server.get("/unknown1").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_code_has_no_stats() {
    let ctx = common::create_test_state();
    let server = server(&ctx);

    server.get("/stats/missing1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_url_with_embedded_newline_redirects_cleanly() {
    let ctx = common::create_test_state();
    let server = server(&ctx);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a\nb", "shortcode": "unic1" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server.get("/unic1").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/ab");

    let response = server.get("/stats/unic1").await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/ab");
    assert_eq!(json["click_count"], 1);
}

#[tokio::test]
async fn test_error_responses_are_audited() {
    let (tx, mut rx) = mpsc::channel(64);
    let ctx = common::create_test_state_with_audit(AuditLogger::new(Stack::Backend, tx));
    let server = server(&ctx);

    server.get("/missing1").await.assert_status_not_found();

    let mut entries = Vec::new();
    while let Ok(entry) = rx.try_recv() {
        entries.push(entry);
    }

    assert!(entries.iter().any(|e| {
        e.level == Level::Error
            && e.package == Package::Handler
            && e.message == "Request failed with 404 Not Found: Shortcode not found"
    }));
}

#[tokio::test]
async fn test_successful_requests_are_not_audited_as_errors() {
    let (tx, mut rx) = mpsc::channel(64);
    let ctx = common::create_test_state_with_audit(AuditLogger::new(Stack::Backend, tx));
    let server = server(&ctx);

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/ok", "shortcode": "okay1" }))
        .await
        .assert_status(StatusCode::CREATED);
    server.get("/okay1").await;

    while let Ok(entry) = rx.try_recv() {
        assert_ne!(entry.level, Level::Error, "unexpected entry: {}", entry.message);
    }
}

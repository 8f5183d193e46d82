mod common;

use axum::http::{HeaderName, HeaderValue};
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::TimeDelta;
use common::MockConnectInfoLayer;
use snaplink::api::handlers::redirect_handler;
use snaplink::application::services::Visit;
use snaplink::domain::repositories::{LinkRepository, StatsRepository};
use snaplink::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "redirect1", "https://example.com/target", None).await;
    let server = server(ctx.state);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let ctx = common::create_test_state();
    let server = server(ctx.state);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Shortcode not found");
}

#[tokio::test]
async fn test_redirect_records_direct_click() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "clickme", "https://example.com", None).await;
    let server = server(ctx.state);

    server.get("/clickme").await;

    let clicks = ctx.store.list_clicks("clickme").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "direct");
    assert_eq!(clicks[0].geo, "Unknown");
    assert_eq!(clicks[0].clicked_at, common::start_time());

    let link = ctx.store.find_by_code("clickme").await.unwrap().unwrap();
    assert_eq!(link.click_count, 1);
}

#[tokio::test]
async fn test_redirect_records_referer() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "withref", "https://example.com", None).await;
    let server = server(ctx.state);

    server
        .get("/withref")
        .add_header("Referer", "https://news.example.org/post")
        .await;

    let clicks = ctx.store.list_clicks("withref").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "https://news.example.org/post");
}

#[tokio::test]
async fn test_redirect_records_empty_referer() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "emptyref", "https://example.com", None).await;
    let server = server(ctx.state);

    server.get("/emptyref").add_header("Referer", "").await;

    let clicks = ctx.store.list_clicks("emptyref").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "");
}

#[tokio::test]
async fn test_redirect_records_non_utf8_referer_lossily() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "rawref", "https://example.com", None).await;
    let server = server(ctx.state);

    server
        .get("/rawref")
        .add_header(
            HeaderName::from_static("referer"),
            HeaderValue::from_bytes(b"https://ref.example/caf\xe9").unwrap(),
        )
        .await;

    let clicks = ctx.store.list_clicks("rawref").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "https://ref.example/caf\u{FFFD}");
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "oldlink", "https://example.com", Some(1)).await;
    let server = server(ctx.state);

    ctx.clock.advance(TimeDelta::seconds(61));

    let response = server.get("/oldlink").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "expired");

    // Rejected visits are not counted
    let link = ctx.store.find_by_code("oldlink").await.unwrap().unwrap();
    assert_eq!(link.click_count, 0);
    assert!(ctx.store.list_clicks("oldlink").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_redirect_at_exact_expiry_is_allowed() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "boundary", "https://example.com", Some(1)).await;
    let server = server(ctx.state);

    ctx.clock.advance(TimeDelta::minutes(1));

    let response = server.get("/boundary").await;
    assert_eq!(response.status_code(), 307);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_visits_are_all_counted() {
    let ctx = common::create_test_state();
    common::create_test_link(&ctx.state, "busy", "https://example.com", None).await;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = ctx.state.redirect_service.clone();
        handles.push(tokio::spawn(async move {
            service.resolve("busy", Visit::default()).await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "https://example.com/");
    }

    let link = ctx.store.find_by_code("busy").await.unwrap().unwrap();
    let clicks = ctx.store.list_clicks("busy").await.unwrap();
    assert_eq!(link.click_count, 50);
    assert_eq!(clicks.len(), 50);
}

#![allow(dead_code)]

use axum::extract::ConnectInfo;
use chrono::{DateTime, TimeZone, Utc};
use snaplink::application::services::ShortenerSettings;
use snaplink::domain::clock::ManualClock;
use snaplink::infrastructure::audit::{AuditLogger, Stack};
use snaplink::infrastructure::geo::StaticGeoResolver;
use snaplink::infrastructure::persistence::InMemoryStore;
use snaplink::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_BASE_URL: &str = "http://short.test/";

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub store: Arc<InMemoryStore>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with(ShortenerSettings {
        base_url: TEST_BASE_URL.to_string(),
        ..ShortenerSettings::default()
    })
}

pub fn create_test_state_with(settings: ShortenerSettings) -> TestContext {
    build_context(settings, AuditLogger::local_only(Stack::Backend))
}

pub fn create_test_state_with_audit(audit: AuditLogger) -> TestContext {
    build_context(
        ShortenerSettings {
            base_url: TEST_BASE_URL.to_string(),
            ..ShortenerSettings::default()
        },
        audit,
    )
}

fn build_context(settings: ShortenerSettings, audit: AuditLogger) -> TestContext {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(ManualClock::new(start_time()));

    let state = AppState::new(
        store.clone(),
        clock.clone(),
        Arc::new(StaticGeoResolver::default()),
        audit,
        settings,
    );

    TestContext {
        state,
        clock,
        store,
    }
}

/// Stores a link through the service, as a `POST /shorten` would.
pub async fn create_test_link(state: &AppState, code: &str, url: &str, validity: Option<i64>) {
    state
        .link_service
        .create_short_link(url.to_string(), validity, Some(code.to_string()))
        .await
        .unwrap();
}

/// Injects a fixed peer address so handlers extracting `ConnectInfo` work
/// without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

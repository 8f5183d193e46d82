//! HTTP server initialization and runtime setup.
//!
//! Handles store creation, audit worker spawning, and Axum server lifecycle.

use crate::application::services::ShortenerSettings;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::audit::{
    AuditLogger, AuditSink, HttpAuditSink, NullAuditSink, Stack, run_audit_worker,
};
use crate::infrastructure::geo::StaticGeoResolver;
use crate::infrastructure::persistence::InMemoryStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Audit sink (HTTP collector or no-op) and its background worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The audit HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryStore::new());
    tracing::info!("In-memory store ready");

    let sink: Arc<dyn AuditSink> = match &config.audit_log_url {
        Some(url) => {
            let sink = HttpAuditSink::new(
                url.clone(),
                config.audit_log_token.clone(),
                config.audit_log_timeout(),
            )
            .context("Failed to build audit log client")?;
            tracing::info!("Audit delivery enabled");
            Arc::new(sink)
        }
        None => {
            tracing::info!("Audit delivery disabled (NullAuditSink)");
            Arc::new(NullAuditSink)
        }
    };

    let (audit_tx, audit_rx) = mpsc::channel(config.audit_queue_capacity);
    tokio::spawn(run_audit_worker(audit_rx, sink));
    tracing::info!("Audit worker started");

    let settings: ShortenerSettings = config.shortener_settings();
    let state = AppState::new(
        store,
        Arc::new(SystemClock),
        Arc::new(StaticGeoResolver::default()),
        AuditLogger::new(Stack::Backend, audit_tx),
        settings,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

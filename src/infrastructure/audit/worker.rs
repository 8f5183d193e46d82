//! Background delivery of audit entries.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use super::event::AuditEntry;
use super::sink::AuditSink;

/// Delivery attempts after the first failure.
const MAX_RETRIES: usize = 3;

/// Drains the audit channel and forwards each entry to `sink`.
///
/// Failed deliveries are retried with exponential backoff, then logged and
/// dropped. Returns once every sender has been dropped and the queue is empty.
pub async fn run_audit_worker(mut rx: mpsc::Receiver<AuditEntry>, sink: Arc<dyn AuditSink>) {
    while let Some(entry) = rx.recv().await {
        deliver(sink.as_ref(), &entry).await;
    }

    debug!("Audit queue closed, worker stopping");
}

async fn deliver(sink: &dyn AuditSink, entry: &AuditEntry) {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    if let Err(e) = Retry::spawn(strategy, move || sink.send(entry)).await {
        metrics::counter!("snaplink_audit_delivery_failures_total").increment(1);
        warn!(
            error = %e,
            package = entry.package.as_str(),
            "Failed to deliver audit entry, dropping it"
        );
    }
}

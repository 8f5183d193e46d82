//! Non-blocking handle for emitting audit entries.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, info, warn};

use super::event::{AuditEntry, Level, Package, Stack};

/// Cheap, cloneable handle used by services and handlers to emit audit entries.
///
/// Every entry is mirrored to local `tracing` output. When a queue is attached
/// the entry is also handed to the background worker with `try_send`; a full
/// or closed queue drops the entry with a local warning. Emitting never fails
/// and never waits.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    stack: Stack,
    sender: Option<mpsc::Sender<AuditEntry>>,
}

impl AuditLogger {
    /// Creates a logger feeding the given delivery queue.
    pub fn new(stack: Stack, sender: mpsc::Sender<AuditEntry>) -> Self {
        Self {
            stack,
            sender: Some(sender),
        }
    }

    /// Creates a logger that only writes to local `tracing` output.
    pub fn local_only(stack: Stack) -> Self {
        Self {
            stack,
            sender: None,
        }
    }

    pub fn debug(&self, package: Package, message: impl AsRef<str>) {
        self.log(Level::Debug, package, message);
    }

    pub fn info(&self, package: Package, message: impl AsRef<str>) {
        self.log(Level::Info, package, message);
    }

    pub fn warn(&self, package: Package, message: impl AsRef<str>) {
        self.log(Level::Warn, package, message);
    }

    pub fn error(&self, package: Package, message: impl AsRef<str>) {
        self.log(Level::Error, package, message);
    }

    /// Validates, mirrors and enqueues one entry.
    pub fn log(&self, level: Level, package: Package, message: impl AsRef<str>) {
        let entry = match AuditEntry::new(self.stack, level, package, message) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(package = package.as_str(), "Rejected audit entry: {}", e);
                return;
            }
        };

        mirror(&entry);

        let Some(sender) = &self.sender else {
            return;
        };

        match sender.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                metrics::counter!("snaplink_audit_dropped_total").increment(1);
                warn!("Audit queue is full, dropping entry");
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Audit queue is closed, dropping entry");
            }
        }
    }

    /// Whether entries are forwarded to a delivery queue.
    pub fn is_forwarding(&self) -> bool {
        self.sender.is_some()
    }

    /// Returns `true` if a delivery queue is attached and its worker has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.as_ref().is_some_and(|s| s.is_closed())
    }

    /// Remaining queue capacity, if a queue is attached.
    pub fn capacity(&self) -> Option<usize> {
        self.sender.as_ref().map(|s| s.capacity())
    }
}

fn mirror(entry: &AuditEntry) {
    let package = entry.package.as_str();
    match entry.level {
        Level::Debug => debug!(target: "audit", package, "{}", entry.message),
        Level::Info => info!(target: "audit", package, "{}", entry.message),
        Level::Warn => warn!(target: "audit", package, "{}", entry.message),
        Level::Error | Level::Fatal => error!(target: "audit", package, "{}", entry.message),
    }
}

//! Audit logging to a remote collector.
//!
//! Services emit entries through [`AuditLogger`], which validates them,
//! mirrors them to `tracing` and queues them on a bounded channel.
//! [`run_audit_worker`] drains the channel and posts each entry to an
//! [`AuditSink`]. Delivery is fire-and-forget: collector outages are logged
//! locally and never reach the request path.
//!
//! # Flow
//!
//! 1. A service calls [`AuditLogger::info`] (or another level)
//! 2. The message is validated into an [`AuditEntry`]
//! 3. The entry is offered to the queue with `try_send`
//! 4. The worker delivers it via [`HttpAuditSink`] with bounded retry

mod error;
mod event;
mod logger;
mod sink;
mod worker;

pub use error::AuditError;
pub use event::{AuditEntry, Level, MIN_MESSAGE_LEN, Package, Stack};
pub use logger::AuditLogger;
pub use sink::{AuditSink, HttpAuditSink, NullAuditSink};
pub use worker::run_audit_worker;

//! Audit log entry model.

use serde::Serialize;

use super::error::AuditError;

/// Minimum number of characters (after trimming) an audit message must carry.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Application tier emitting the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

/// Severity accepted by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Subsystem the entry originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
}

impl Package {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Controller => "controller",
            Self::CronJob => "cron_job",
            Self::Db => "db",
            Self::Domain => "domain",
            Self::Handler => "handler",
            Self::Repository => "repository",
            Self::Route => "route",
            Self::Service => "service",
        }
    }
}

/// One validated message bound for the remote collector.
///
/// Serializes to the collector's wire format:
/// `{"stack": "backend", "level": "info", "package": "service", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl AuditEntry {
    /// Builds an entry, trimming the message.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MessageTooShort`] if the trimmed message has fewer
    /// than [`MIN_MESSAGE_LEN`] characters.
    pub fn new(
        stack: Stack,
        level: Level,
        package: Package,
        message: impl AsRef<str>,
    ) -> Result<Self, AuditError> {
        let message = message.as_ref().trim();
        let len = message.chars().count();
        if len < MIN_MESSAGE_LEN {
            return Err(AuditError::MessageTooShort(len));
        }

        Ok(Self {
            stack,
            level,
            package,
            message: message.to_string(),
        })
    }
}

//! Destinations for audit entries.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::AuditError;
use super::event::AuditEntry;

/// A destination that accepts audit entries.
///
/// Implementations report failures to the caller; the audit worker decides
/// whether to retry and always swallows the final error.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn send(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// Posts entries as JSON to a remote log collector.
pub struct HttpAuditSink {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpAuditSink {
    /// Creates a sink posting to `endpoint`, optionally with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Client`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AuditError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AuditError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }
}

#[async_trait]
impl AuditSink for HttpAuditSink {
    async fn send(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut request = self.client.post(&self.endpoint).json(entry);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request.send().await?.error_for_status()?;
        Ok(())
    }
}

/// A sink that discards everything.
///
/// Used when no collector endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditSink;

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn send(&self, _entry: &AuditEntry) -> Result<(), AuditError> {
        Ok(())
    }
}

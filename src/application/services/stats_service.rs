//! Click recording and statistics.

use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::{DetailedStats, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::audit::{AuditLogger, Package};
use serde_json::json;

/// Service for recording clicks and reading link statistics.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
    audit: AuditLogger,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>, audit: AuditLogger) -> Self {
        Self { repository, audit }
    }

    /// Appends a click to the link's log and bumps its counter.
    ///
    /// Clicks for unknown codes are ignored and reported as `false`.
    pub async fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError> {
        self.repository.record_click(code, click).await
    }

    /// Retrieves the link record with its full click log.
    ///
    /// Expired links are still reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_detailed_stats(&self, code: &str) -> Result<DetailedStats, AppError> {
        match self.repository.get_stats_by_code(code).await? {
            Some(stats) => {
                self.audit.info(
                    Package::Service,
                    format!("Stats retrieved for shortcode '{code}'."),
                );
                Ok(stats)
            }
            None => {
                self.audit.warn(
                    Package::Repository,
                    format!("Stats requested for nonexistent shortcode '{code}'."),
                );
                Err(AppError::not_found(
                    "Shortcode not found",
                    json!({ "code": code }),
                ))
            }
        }
    }
}

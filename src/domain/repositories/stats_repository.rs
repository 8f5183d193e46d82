//! Repository trait for click analytics.

use crate::domain::entities::{Click, Link};
use crate::error::AppError;
use async_trait::async_trait;

/// A record together with its full click log, read as one consistent snapshot.
///
/// `link.click_count` always equals `items.len()`.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub link: Link,
    pub items: Vec<Click>,
}

/// Repository interface for click tracking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Increments the click count and appends the click as one atomic update.
    ///
    /// Unknown codes are ignored.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the click was recorded, `Ok(false)` if the code is unknown.
    async fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError>;

    /// Returns the click log in recording order; empty for unknown codes.
    async fn list_clicks(&self, code: &str) -> Result<Vec<Click>, AppError>;

    /// Returns the record and its click log read under a single guard.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DetailedStats))` if the code exists
    /// - `Ok(None)` otherwise
    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError>;
}

//! Repository trait for short link records.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortcode records.
///
/// Implementations must be safe to call from many request tasks at once.
/// `create` is an atomic check-and-insert: two concurrent calls with the same
/// code never both succeed, and no reader observes a half-built record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true if a record with this code is present.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Stores a new record with a zero click count and an empty click log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a record by its shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}

//! Link entity representing a shortened URL record.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// Everything except `click_count` is fixed at creation. The count is only
/// advanced by the store together with an append to the click log, so it
/// always equals the number of recorded clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
}

impl Link {
    /// Builds a fresh record with no clicks from creation input.
    pub fn from_new(new_link: NewLink) -> Self {
        Self {
            code: new_link.code,
            original_url: new_link.original_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            click_count: 0,
        }
    }

    /// Returns true if `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

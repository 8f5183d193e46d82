//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Source label recorded when a visit carries no `Referer` header.
pub const DIRECT_SOURCE: &str = "direct";

/// A click recorded when a shortened link is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    /// Referrer of the visit, or [`DIRECT_SOURCE`].
    pub source: String,
    /// Coarse location label of the visitor.
    pub geo: String,
}

impl Click {
    /// Creates a click, falling back to [`DIRECT_SOURCE`] when no referrer was sent.
    ///
    /// A referrer that was sent is recorded verbatim, even when empty.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = Click::new(Utc::now(), None, "Unknown".to_string());
    /// assert_eq!(click.source, "direct");
    /// ```
    pub fn new(clicked_at: DateTime<Utc>, referer: Option<String>, geo: String) -> Self {
        let source = referer.unwrap_or_else(|| DIRECT_SOURCE.to_string());

        Self {
            clicked_at,
            source,
            geo,
        }
    }
}

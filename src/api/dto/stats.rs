//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::repositories::DetailedStats;

/// Statistics for a specific short link, with every recorded click.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub click_count: u64,
    pub clicks: Vec<ClickInfo>,
}

impl From<DetailedStats> for StatsResponse {
    fn from(stats: DetailedStats) -> Self {
        Self {
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            click_count: stats.link.click_count,
            clicks: stats.items.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

//! In-memory implementation of the link and stats repositories.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::{DetailedStats, LinkRepository, StatsRepository};
use crate::error::AppError;

/// A record and its click log, kept in one map slot.
///
/// Keeping both under the same shard lock makes the counter increment and
/// the log append a single critical section.
#[derive(Debug)]
struct Slot {
    link: Link,
    clicks: Vec<Click>,
}

/// Process-wide store mapping shortcodes to records and click logs.
///
/// Backed by a sharded [`DashMap`], so operations on different codes rarely
/// contend and operations on the same code are serialized by its shard lock.
/// No lock is ever held across an `.await`. Records are never removed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: DashMap<String, Slot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.slots.contains_key(code))
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.slots.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already in use",
                json!({ "code": new_link.code }),
            )),
            Entry::Vacant(vacant) => {
                let link = Link::from_new(new_link);
                vacant.insert(Slot {
                    link: link.clone(),
                    clicks: Vec::new(),
                });
                debug!(code = %link.code, "Stored new link");
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.slots.get(code).map(|slot| slot.link.clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.slots.len())
    }
}

#[async_trait]
impl StatsRepository for InMemoryStore {
    async fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError> {
        let Some(mut slot) = self.slots.get_mut(code) else {
            debug!(code, "Ignoring click for unknown code");
            return Ok(false);
        };

        slot.link.click_count += 1;
        slot.clicks.push(click);
        Ok(true)
    }

    async fn list_clicks(&self, code: &str) -> Result<Vec<Click>, AppError> {
        Ok(self
            .slots
            .get(code)
            .map(|slot| slot.clicks.clone())
            .unwrap_or_default())
    }

    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError> {
        Ok(self.slots.get(code).map(|slot| DetailedStats {
            link: slot.link.clone(),
            items: slot.clicks.clone(),
        }))
    }
}

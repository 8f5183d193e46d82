//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    LinkService, RedirectService, ShortenerSettings, StatsService,
};
use crate::domain::clock::Clock;
use crate::domain::geo::GeoResolver;
use crate::infrastructure::audit::AuditLogger;
use crate::infrastructure::persistence::InMemoryStore;

/// Application state shared across request handlers.
///
/// Owns the single [`InMemoryStore`] through the services built on it; there
/// is no other shared mutable state in the process.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryStore>>,
    pub redirect_service: Arc<RedirectService<InMemoryStore, InMemoryStore>>,
    pub stats_service: Arc<StatsService<InMemoryStore>>,
    pub store: Arc<InMemoryStore>,
    pub audit: AuditLogger,
}

impl AppState {
    /// Wires the services around one store.
    pub fn new(
        store: Arc<InMemoryStore>,
        clock: Arc<dyn Clock>,
        geo: Arc<dyn GeoResolver>,
        audit: AuditLogger,
        settings: ShortenerSettings,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            store.clone(),
            clock.clone(),
            audit.clone(),
            settings,
        ));
        let stats_service = Arc::new(StatsService::new(store.clone(), audit.clone()));
        let redirect_service = Arc::new(RedirectService::new(
            store.clone(),
            stats_service.clone(),
            geo,
            clock,
            audit.clone(),
        ));

        Self {
            link_service,
            redirect_service,
            stats_service,
            store,
            audit,
        }
    }
}

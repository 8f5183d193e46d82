//! Shortcode resolution with expiry enforcement and click recording.

use serde_json::json;
use std::net::IpAddr;
use std::sync::Arc;

use crate::application::services::StatsService;
use crate::domain::clock::Clock;
use crate::domain::entities::Click;
use crate::domain::geo::GeoResolver;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::audit::{AuditLogger, Package};

/// Request metadata attached to a visit.
#[derive(Debug, Clone, Default)]
pub struct Visit {
    /// Value of the `Referer` header, if any.
    pub referer: Option<String>,
    pub client_ip: Option<IpAddr>,
}

/// Resolves shortcodes to their target URLs.
///
/// Each request is decided on the first matching rule:
///
/// 1. Unknown code: [`AppError::NotFound`]
/// 2. Arrival time past `expires_at`: [`AppError::Expired`]
/// 3. Otherwise one click is recorded and the original URL returned
///
/// The click counter is advanced only by the store, once per successful visit.
pub struct RedirectService<L: LinkRepository, S: StatsRepository> {
    link_repository: Arc<L>,
    stats_service: Arc<StatsService<S>>,
    geo: Arc<dyn GeoResolver>,
    clock: Arc<dyn Clock>,
    audit: AuditLogger,
}

impl<L: LinkRepository, S: StatsRepository> RedirectService<L, S> {
    pub fn new(
        link_repository: Arc<L>,
        stats_service: Arc<StatsService<S>>,
        geo: Arc<dyn GeoResolver>,
        clock: Arc<dyn Clock>,
        audit: AuditLogger,
    ) -> Self {
        Self {
            link_repository,
            stats_service,
            geo,
            clock,
            audit,
        }
    }

    /// Resolves `code` and records the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] once the validity window has passed. Neither
    /// records a click.
    pub async fn resolve(&self, code: &str, visit: Visit) -> Result<String, AppError> {
        let now = self.clock.now();

        let Some(link) = self.link_repository.find_by_code(code).await? else {
            self.audit.warn(
                Package::Repository,
                format!("Shortcode '{code}' not found."),
            );
            return Err(AppError::not_found(
                "Shortcode not found",
                json!({ "code": code }),
            ));
        };

        if link.is_expired_at(now) {
            self.audit
                .info(Package::Service, format!("Shortcode '{code}' expired."));
            metrics::counter!("snaplink_redirects_expired_total").increment(1);
            return Err(AppError::expired(
                "Shortlink expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            ));
        }

        let geo = self.geo.resolve(visit.client_ip);
        let click = Click::new(now, visit.referer, geo);
        self.stats_service.record_click(code, click).await?;

        self.audit.info(
            Package::Handler,
            format!(
                "Redirected to {} for shortcode '{code}'.",
                link.original_url
            ),
        );
        metrics::counter!("snaplink_redirects_total").increment(1);

        Ok(link.original_url)
    }
}

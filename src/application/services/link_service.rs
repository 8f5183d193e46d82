//! Short link creation and lookup.

use chrono::TimeDelta;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::audit::{AuditLogger, Package};
use crate::utils::code_generator::{CodePolicy, allocate_unique_code};
use crate::utils::url_validator::check_absolute_url;

/// Validity window applied when a request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Settings that shape newly created links.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Prefix of every short link, e.g. `http://short.example.com/`.
    pub base_url: String,
    pub default_validity_minutes: i64,
    pub code_policy: CodePolicy,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://short.affordmed.com/".to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            code_policy: CodePolicy::default(),
        }
    }
}

/// A freshly stored link together with its public short URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating and retrieving shortened links.
///
/// Input is expected to be validated by the HTTP layer: the URL is absolute,
/// the validity window is positive and a custom code matches the shortcode
/// pattern.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    clock: Arc<dyn Clock>,
    audit: AuditLogger,
    settings: ShortenerSettings,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        clock: Arc<dyn Clock>,
        audit: AuditLogger,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            link_repository,
            clock,
            audit,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, it is used unless already taken
    /// - Otherwise a random code is allocated under the configured [`CodePolicy`];
    ///   a generated code taken by a concurrent request is replaced by a new draw
    ///
    /// The URL is stored in its parsed, serialized form. The link expires
    /// `validity_minutes` (or the configured default) after creation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::GenerationFailed`] if random allocation runs out of attempts.
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S)
    /// URL or the validity window overflows the calendar.
    pub async fn create_short_link(
        &self,
        original_url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        self.audit.info(
            Package::Controller,
            format!("Received shorten request for URL: {original_url}"),
        );

        let original_url = check_absolute_url(&original_url)
            .map(String::from)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": original_url })))?;

        let minutes = validity_minutes.unwrap_or(self.settings.default_validity_minutes);
        let created_at = self.clock.now();
        let expires_at = TimeDelta::try_minutes(minutes)
            .and_then(|window| created_at.checked_add_signed(window))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Validity window is out of range",
                    json!({ "validity": minutes }),
                )
            })?;

        let new_link = |code| NewLink {
            code,
            original_url: original_url.clone(),
            created_at,
            expires_at,
        };

        let link = match custom_code {
            Some(custom) => {
                if self.link_repository.exists(&custom).await? {
                    self.audit.warn(
                        Package::Repository,
                        format!("Shortcode '{custom}' already exists."),
                    );
                    return Err(AppError::conflict(
                        "Shortcode already in use",
                        json!({ "code": custom }),
                    ));
                }
                self.link_repository.create(new_link(custom)).await?
            }
            None => self
                .create_with_generated_code(new_link)
                .await
                .inspect_err(|_| {
                    self.audit
                        .error(Package::Service, "Failed to generate unique shortcode.");
                })?,
        };

        self.audit.info(
            Package::Repository,
            format!("Shortened URL stored with code: {}", link.code),
        );
        metrics::counter!("snaplink_links_created_total").increment(1);

        let short_url = self.get_short_url(&link.code);
        Ok(CreatedLink { link, short_url })
    }

    /// Allocates a code and stores the link, drawing again if another request
    /// claims the code between the existence check and the insert.
    async fn create_with_generated_code(
        &self,
        new_link: impl Fn(String) -> NewLink,
    ) -> Result<Link, AppError> {
        let policy = &self.settings.code_policy;

        for _ in 0..policy.max_attempts {
            let code = allocate_unique_code(self.link_repository.as_ref(), policy).await?;

            match self.link_repository.create(new_link(code)).await {
                Err(AppError::Conflict { .. }) => {
                    debug!("Generated code was claimed concurrently, drawing again");
                }
                result => return result,
            }
        }

        Err(AppError::generation_failed(
            "Could not generate unique shortcode",
            json!({ "attempts": policy.max_attempts }),
        ))
    }

    /// Builds the public short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }
}

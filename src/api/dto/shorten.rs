//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::utils::code_generator::{is_reserved_code, is_valid_code};
use crate::utils::url_validator::check_absolute_url;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (must be an absolute HTTP/HTTPS URL).
    #[validate(custom(function = "validate_target_url"))]
    pub url: String,

    /// Validity window in minutes (defaults to the configured value).
    #[validate(range(min = 1, message = "Validity must be a positive integer (minutes)"))]
    pub validity: Option<i64>,

    /// Optional custom short code: 4-32 letters or digits.
    #[validate(custom(function = "validate_shortcode"))]
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortlink: String,
    pub expiry: DateTime<Utc>,
}

fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    check_absolute_url(url).map(|_| ()).map_err(|e| {
        ValidationError::new("invalid_url").with_message(Cow::Owned(e.to_string()))
    })
}

fn validate_shortcode(code: &str) -> Result<(), ValidationError> {
    if !is_valid_code(code) {
        return Err(ValidationError::new("invalid_shortcode").with_message(Cow::Borrowed(
            "Shortcode must be alphanumeric and 4-32 chars",
        )));
    }

    if is_reserved_code(code) {
        return Err(ValidationError::new("reserved_shortcode")
            .with_message(Cow::Borrowed("This shortcode is reserved")));
    }

    Ok(())
}

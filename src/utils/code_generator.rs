//! Short code generation and allocation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet.
//! Random draws are not unique by themselves; [`allocate_unique_code`] checks
//! each draw against the store and gives up after a bounded number of
//! collisions.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Random draws attempted before allocation fails.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 32;

/// Codes that would be shadowed by fixed routes.
pub const RESERVED_CODES: &[&str] = &["health", "shorten"];

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{4,32}$").expect("shortcode pattern is a valid regex")
});

/// How random codes are drawn and how many collisions are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    pub length: usize,
    pub max_attempts: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generates a random alphanumeric code of exactly `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a shortcode: 4-32 ASCII letters or digits.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Draws codes until one is neither reserved nor present in the store.
///
/// # Errors
///
/// Returns [`AppError::GenerationFailed`] if all `policy.max_attempts` draws
/// collide, and propagates store errors.
pub async fn allocate_unique_code<L>(repository: &L, policy: &CodePolicy) -> Result<String, AppError>
where
    L: LinkRepository + ?Sized,
{
    for attempt in 1..=policy.max_attempts {
        let code = generate_code(policy.length);

        if !is_reserved_code(&code) && !repository.exists(&code).await? {
            return Ok(code);
        }

        debug!(attempt, "Generated code collided with an existing one");
    }

    Err(AppError::generation_failed(
        "Could not generate unique shortcode",
        json!({ "attempts": policy.max_attempts }),
    ))
}

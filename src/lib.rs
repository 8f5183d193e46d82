//! # snaplink
//!
//! An in-memory URL shortener with expiring links and per-click analytics,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits, clock and geo contracts
//! - **Application Layer** ([`application`]) - Shortening, redirect/expiry and analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, audit log delivery, geo stub
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random collision-checked shortcodes or caller-chosen custom codes
//! - Per-link validity window enforced at redirect time (410 Gone)
//! - Click log with timestamp, referrer and coarse location per visit
//! - Fire-and-forget audit logging to a remote collector
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000/"
//! export AUDIT_LOG_URL="http://collector.internal/logs"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkService, RedirectService, ShortenerSettings, StatsService,
    };
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

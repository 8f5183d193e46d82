//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules behind a small
//! API consumed by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup
//! - [`services::redirect_service::RedirectService`] - Resolution, expiry and click capture
//! - [`services::stats_service::StatsService`] - Click recording and statistics

pub mod services;

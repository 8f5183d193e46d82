//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Time source used for creation and expiry
//! - [`geo`] - Visitor location lookup contract
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives a visit for a shortcode
//! 2. The record is looked up and its expiry checked against [`clock::Clock`]
//! 3. An [`entities::Click`] is built from the referrer and [`geo::GeoResolver`]
//! 4. The click is appended via [`repositories::StatsRepository`], which bumps
//!    the record's counter in the same critical section

pub mod clock;
pub mod entities;
pub mod geo;
pub mod repositories;

//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation
//! - [`audit`] - Fire-and-forget delivery to the remote audit collector
//! - [`geo`] - Visitor location resolvers

pub mod audit;
pub mod geo;
pub mod persistence;

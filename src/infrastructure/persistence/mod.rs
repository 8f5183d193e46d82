//! Repository implementations.
//!
//! - [`InMemoryStore`] - Process-local store implementing both
//!   [`crate::domain::repositories::LinkRepository`] and
//!   [`crate::domain::repositories::StatsRepository`]

pub mod memory_store;

pub use memory_store::InMemoryStore;

//! Core domain entities.
//!
//! - [`Link`] - A shortened URL record with its click counter
//! - [`Click`] - One recorded visit to a link
//!
//! `NewLink` is the creation input for [`Link`]; the store turns it into a
//! record with a zero click count.

pub mod click;
pub mod link;

pub use click::{Click, DIRECT_SOURCE};
pub use link::{Link, NewLink};

//! Coarse visitor geolocation.

use std::net::IpAddr;

/// Label used when a location cannot be determined.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Resolves a client address to a coarse location label.
///
/// Resolution is best-effort: implementations return [`UNKNOWN_LOCATION`]
/// instead of failing.
pub trait GeoResolver: Send + Sync {
    fn resolve(&self, ip: Option<IpAddr>) -> String;
}

//! Geo resolver implementations.

use std::net::IpAddr;

use crate::domain::geo::{GeoResolver, UNKNOWN_LOCATION};

/// Resolver that answers every lookup with the same label.
///
/// Stands in until a real IP-to-location database is wired in.
#[derive(Debug, Clone)]
pub struct StaticGeoResolver {
    label: String,
}

impl StaticGeoResolver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for StaticGeoResolver {
    fn default() -> Self {
        Self::new(UNKNOWN_LOCATION)
    }
}

impl GeoResolver for StaticGeoResolver {
    fn resolve(&self, _ip: Option<IpAddr>) -> String {
        self.label.clone()
    }
}

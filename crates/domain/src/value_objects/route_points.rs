//! Resolved route endpoints

use serde::{Deserialize, Serialize};

use super::GeoLocation;

/// The coordinates the two addresses resolved to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoints {
    /// Resolved origin
    pub origin: GeoLocation,
    /// Resolved destination
    pub destination: GeoLocation,
}

impl RoutePoints {
    #[must_use]
    pub const fn new(origin: GeoLocation, destination: GeoLocation) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

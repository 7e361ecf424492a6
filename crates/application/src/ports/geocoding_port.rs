//! Geocoding service port
//!
//! Defines the interface for free-text address search.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One ranked geocoding candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Full display name, as shown in suggestion lists
    pub display_name: String,
    /// Coordinates of the candidate
    pub location: GeoLocation,
}

impl GeocodedPlace {
    #[must_use]
    pub fn new(display_name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            display_name: display_name.into(),
            location,
        }
    }
}

/// Port for geocoding search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for places matching a free-text query, best match first
    ///
    /// An empty list means the service found nothing. Transport failures
    /// and non-2xx responses are reported as `ApplicationError::Transport`.
    async fn search(
        &self,
        query: &str,
        address_details: bool,
    ) -> Result<Vec<GeocodedPlace>, ApplicationError>;
}

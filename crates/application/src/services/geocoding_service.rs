//! Geocoding client used by the widget
//!
//! Turns free text into suggestion lists and single coordinates on top of
//! a [`GeocodingPort`]. Every call is a fresh round trip; nothing is cached
//! or retried.

use std::sync::Arc;

use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// City appended to every suggestion query
pub const DEFAULT_CITY_SUFFIX: &str = "Bishkek";

/// Queries shorter than this many characters are not sent
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Settings for suggestion and resolve behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodingSettings {
    /// City name appended to suggestion queries (`"<query>, <city>"`)
    #[serde(default = "default_city_suffix")]
    pub city_suffix: String,

    /// Minimum query length, in characters, before suggestions are fetched
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

fn default_city_suffix() -> String {
    DEFAULT_CITY_SUFFIX.to_string()
}

const fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            city_suffix: default_city_suffix(),
            min_query_chars: default_min_query_chars(),
        }
    }
}

impl GeocodingSettings {
    /// Whether a query is long enough to be sent
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_chars
    }

    /// The query sent for suggestions
    #[must_use]
    pub fn city_query(&self, query: &str) -> String {
        if self.city_suffix.is_empty() {
            query.to_string()
        } else {
            format!("{query}, {}", self.city_suffix)
        }
    }
}

/// Suggest and resolve addresses within the configured city
pub struct GeocodingService {
    port: Arc<dyn GeocodingPort>,
    settings: GeocodingSettings,
}

impl std::fmt::Debug for GeocodingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GeocodingService {
    pub fn new(port: Arc<dyn GeocodingPort>, settings: GeocodingSettings) -> Self {
        Self { port, settings }
    }

    pub const fn settings(&self) -> &GeocodingSettings {
        &self.settings
    }

    /// Candidate display names for a partially typed address
    ///
    /// Returns an empty list without any network call for short queries.
    /// Service failures are logged and also yield an empty list.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Vec<String> {
        if !self.settings.accepts(query) {
            debug!("Query too short for suggestions");
            return Vec::new();
        }

        let city_query = self.settings.city_query(query);
        match self.port.search(&city_query, true).await {
            Ok(places) => {
                debug!(count = places.len(), "Suggestions fetched");
                places.into_iter().map(|place| place.display_name).collect()
            },
            Err(e) => {
                let failure = ApplicationError::Suggestion(e.to_string());
                warn!(error = %failure, "Failed to fetch suggestions");
                Vec::new()
            },
        }
    }

    /// Coordinates of the best match for an address
    ///
    /// # Errors
    ///
    /// `AddressNotFound` if the service returns no candidates; transport
    /// failures are passed through unchanged.
    #[instrument(skip(self))]
    pub async fn resolve(&self, address: &str) -> Result<GeoLocation, ApplicationError> {
        let places = self.port.search(address, false).await?;
        let first = places
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::AddressNotFound(address.to_string()))?;

        debug!(location = %first.location, "Resolved address");
        Ok(first.location)
    }
}

//! Geocoding adapter - Implements GeocodingPort using integration_osm

use application::error::ApplicationError;
use application::ports::{GeocodedPlace, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_osm::{
    GeocodingClient, NominatimConfig, NominatimGeocodingClient, NominatimPlace, OsmError,
};
use tracing::{debug, instrument, warn};

/// Adapter for address search via Nominatim
pub struct NominatimGeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for NominatimGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl NominatimGeocodingAdapter {
    /// Wrap an existing geocoding client
    pub fn new(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Create an adapter over a Nominatim client built from `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client cannot be created.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn map_error(e: &OsmError) -> ApplicationError {
        warn!(error = %e, "Nominatim request failed");
        ApplicationError::Transport(format!("Geocoding failed: {e}"))
    }

    /// Places with unusable coordinates are skipped
    fn convert_place(place: NominatimPlace) -> Option<GeocodedPlace> {
        let coordinate = match place.coordinates() {
            Ok(coordinate) => coordinate,
            Err(e) => {
                warn!(error = %e, name = ?place.display_name, "Skipping place with malformed coordinates");
                return None;
            },
        };
        let Ok(location) = GeoLocation::new(coordinate.lat, coordinate.lon) else {
            warn!(lat = coordinate.lat, lon = coordinate.lon, "Skipping place outside coordinate range");
            return None;
        };

        let display_name = place
            .display_name
            .unwrap_or_else(|| location.to_string());
        Some(GeocodedPlace::new(display_name, location))
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        address_details: bool,
    ) -> Result<Vec<GeocodedPlace>, ApplicationError> {
        let places = self
            .client
            .search(query, address_details)
            .await
            .map_err(|e| Self::map_error(&e))?;

        let places: Vec<_> = places
            .into_iter()
            .filter_map(Self::convert_place)
            .collect();

        debug!(count = places.len(), "Geocoding search completed");
        Ok(places)
    }
}

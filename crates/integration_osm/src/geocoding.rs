//! Nominatim geocoding client
//!
//! Runs free-text searches against the Nominatim `/search` endpoint. Each
//! call is a single request: no caching, rate limiting or retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::OsmError;
use crate::models::NominatimPlace;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Search for places matching a free-text query
    ///
    /// With `address_details` the service also returns the address
    /// breakdown of each place.
    async fn search(
        &self,
        query: &str,
        address_details: bool,
    ) -> Result<Vec<NominatimPlace>, OsmError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, OsmError> {
        config.validate().map_err(OsmError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OsmError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        address_details: bool,
    ) -> Result<Vec<NominatimPlace>, OsmError> {
        let mut params = vec![("format", "json"), ("q", query)];
        if address_details {
            params.push(("addressdetails", "1"));
        }

        let response = self
            .client
            .get(self.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| OsmError::from_reqwest(&e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(OsmError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| OsmError::ParseError(e.to_string()))?;

        debug!(count = places.len(), "Nominatim search completed");
        Ok(places)
    }
}

//! OSRM routing client
//!
//! Requests driving routes from an OSRM `route` service, with full GeoJSON
//! geometry and alternatives.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::OsrmConfig;
use crate::error::OsmError;
use crate::models::{Coordinate, OsrmRoute, OsrmRouteResponse};

/// Query parameters sent with every route request
const ROUTE_PARAMS: [(&str, &str); 4] = [
    ("overview", "full"),
    ("geometries", "geojson"),
    ("alternatives", "true"),
    ("steps", "false"),
];

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute routes through the given waypoints, best first
    async fn route(&self, waypoints: &[Coordinate]) -> Result<Vec<OsrmRoute>, OsmError>;
}

/// OSRM HTTP API client
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, OsmError> {
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

    /// `{base}/route/v1/{profile}/{lon},{lat};{lon},{lat}...`
    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let path = waypoints
            .iter()
            .map(|c| c.to_osrm())
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/{}/{path}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    async fn route(&self, waypoints: &[Coordinate]) -> Result<Vec<OsrmRoute>, OsmError> {
        if waypoints.len() < 2 {
            return Err(OsmError::InvalidRequest(format!(
                "at least 2 waypoints required, got {}",
                waypoints.len()
            )));
        }

        let response = self
            .client
            .get(self.route_url(waypoints))
            .query(&ROUTE_PARAMS)
            .send()
            .await
            .map_err(|e| OsmError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OsmError::from_reqwest(&e, self.config.timeout_secs))?;

        // OSRM reports routing failures as 400 with a JSON code
        let parsed: Result<OsrmRouteResponse, _> = serde_json::from_str(&body);
        let response = match parsed {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(OsmError::RequestFailed(format!("HTTP {status}")));
            },
            Err(e) => return Err(OsmError::ParseError(e.to_string())),
        };

        if !response.is_ok() {
            warn!(code = %response.code, "OSRM returned no route");
            let detail = response.message.unwrap_or(response.code);
            return Err(OsmError::NoRoute(detail));
        }

        if response.routes.is_empty() {
            return Err(OsmError::NoRoute("empty route list".to_string()));
        }

        debug!(count = response.routes.len(), "OSRM routes received");
        Ok(response.routes)
    }
}

//! Routing adapter - Implements RoutingPort using integration_osm

use application::error::ApplicationError;
use application::ports::{Route, RouteTotals, RoutingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_osm::{Coordinate, OsmError, OsrmConfig, OsrmRoute, OsrmRoutingClient, RoutingClient};
use tracing::{debug, instrument, warn};

/// Adapter for driving routes via an OSRM route service
pub struct OsrmRoutingAdapter {
    client: Box<dyn RoutingClient>,
}

impl std::fmt::Debug for OsrmRoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmRoutingAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl OsrmRoutingAdapter {
    /// Wrap an existing routing client
    pub fn new(client: impl RoutingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Create an adapter over an OSRM client built from `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client cannot be created.
    pub fn from_config(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmRoutingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn map_error(e: OsmError) -> ApplicationError {
        warn!(error = %e, "OSRM request failed");
        match e {
            OsmError::NoRoute(detail) => ApplicationError::Routing(detail),
            other => ApplicationError::Transport(format!("Routing failed: {other}")),
        }
    }

    /// Convert an OSRM route; geometry points outside the valid range are dropped
    fn convert_route(route: &OsrmRoute) -> Route {
        let geometry = route
            .coordinates()
            .into_iter()
            .filter_map(|c| GeoLocation::new(c.lat, c.lon).ok())
            .collect();

        Route {
            totals: RouteTotals {
                total_distance_m: route.distance,
                total_time_s: route.duration,
            },
            geometry,
        }
    }
}

#[async_trait]
impl RoutingPort for OsrmRoutingAdapter {
    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    async fn find_routes(&self, waypoints: &[GeoLocation]) -> Result<Vec<Route>, ApplicationError> {
        let coordinates: Vec<Coordinate> = waypoints
            .iter()
            .map(|w| Coordinate::new(w.latitude(), w.longitude()))
            .collect();

        let routes = self
            .client
            .route(&coordinates)
            .await
            .map_err(Self::map_error)?;

        debug!(count = routes.len(), "Routes computed");
        Ok(routes.iter().map(Self::convert_route).collect())
    }
}

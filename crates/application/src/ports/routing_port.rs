//! Routing service port
//!
//! Defines the interface for computing driving routes between waypoints.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, RouteSummary};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Cumulative totals of a route as reported by the routing service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteTotals {
    /// Total distance in meters
    pub total_distance_m: f64,
    /// Total travel time in seconds
    pub total_time_s: f64,
}

/// A candidate route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Distance and time totals
    pub totals: RouteTotals,
    /// Route line, in travel order
    pub geometry: Vec<GeoLocation>,
}

impl Route {
    /// Summary in kilometers and minutes
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::from_totals(self.totals.total_distance_m, self.totals.total_time_s)
    }
}

/// Port for route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute candidate routes through the waypoints, best candidate first
    async fn find_routes(&self, waypoints: &[GeoLocation]) -> Result<Vec<Route>, ApplicationError>;
}

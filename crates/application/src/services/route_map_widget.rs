//! Route map widget
//!
//! Two address inputs with live suggestions, a build button, and the route
//! and points panels, without any rendering.

use std::sync::Arc;

use domain::value_objects::{AddressField, GeoLocation, RoutePoints, RouteSummary};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApplicationError;
use crate::ports::{AlertPort, GeocodingPort, MapViewPort, RoutingPort};
use crate::services::geocoding_service::{GeocodingService, GeocodingSettings};
use crate::services::route_controller::{RouteController, RouteOutcome};
use crate::services::suggestion_controller::{SuggestionController, SuggestionOutcome};

/// State of one address input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Everything the widget displays at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub origin: FieldSnapshot,
    pub destination: FieldSnapshot,
    /// `None` until a route has been built
    pub summary: Option<RouteSummary>,
    /// `None` until a route has been built
    pub points: Option<RoutePoints>,
}

impl WidgetSnapshot {
    pub const fn field(&self, field: AddressField) -> &FieldSnapshot {
        match field {
            AddressField::Origin => &self.origin,
            AddressField::Destination => &self.destination,
        }
    }
}

/// The route map widget
#[derive(Debug)]
pub struct RouteMapWidget {
    suggestions: SuggestionController,
    routes: RouteController,
}

impl RouteMapWidget {
    /// Wire the widget to its ports
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        routing: Arc<dyn RoutingPort>,
        map: Arc<dyn MapViewPort>,
        alert: Arc<dyn AlertPort>,
        settings: GeocodingSettings,
    ) -> Self {
        let geocoding = Arc::new(GeocodingService::new(geocoding, settings));
        Self {
            suggestions: SuggestionController::new(Arc::clone(&geocoding)),
            routes: RouteController::new(geocoding, routing, map, alert),
        }
    }

    /// Text typed into a field
    pub async fn input(&self, field: AddressField, text: &str) -> SuggestionOutcome {
        self.suggestions.on_input(field, text).await
    }

    /// A suggestion clicked in a field's dropdown
    pub fn select(&self, field: AddressField, candidate: &str) {
        self.suggestions.on_select(field, candidate);
    }

    /// Pick the suggestion at `index` (zero-based) of a field's dropdown
    pub fn select_index(&self, field: AddressField, index: usize) -> Result<String, ApplicationError> {
        self.suggestions.select_index(field, index)
    }

    /// The build button: route between the current field values
    #[instrument(skip(self))]
    pub async fn build_route(&self) -> Result<RouteOutcome, ApplicationError> {
        let origin = self.suggestions.query(AddressField::Origin);
        let destination = self.suggestions.query(AddressField::Destination);
        self.routes.compute_route(&origin, &destination).await
    }

    /// A waypoint dragged on the map
    pub async fn drag_waypoint(
        &self,
        index: usize,
        location: GeoLocation,
    ) -> Result<RouteOutcome, ApplicationError> {
        self.routes.drag_waypoint(index, location).await
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        let field = |field| FieldSnapshot {
            query: self.suggestions.query(field),
            suggestions: self.suggestions.suggestions(field),
        };
        WidgetSnapshot {
            origin: field(AddressField::Origin),
            destination: field(AddressField::Destination),
            summary: self.routes.summary(),
            points: self.routes.points(),
        }
    }
}

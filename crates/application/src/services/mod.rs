//! Application services
//!
//! The widget is made of two controllers sharing one geocoding client:
//! the suggestion controller behind the address inputs and the route
//! controller behind the build button. [`RouteMapWidget`] wires them up.

pub mod geocoding_service;
pub mod route_controller;
pub mod route_map_widget;
pub mod suggestion_controller;

pub use geocoding_service::{
    DEFAULT_CITY_SUFFIX, DEFAULT_MIN_QUERY_CHARS, GeocodingService, GeocodingSettings,
};
pub use route_controller::{ROUTE_FAILURE_ALERT, RouteController, RouteOutcome};
pub use route_map_widget::{FieldSnapshot, RouteMapWidget, WidgetSnapshot};
pub use suggestion_controller::{SuggestionController, SuggestionOutcome};

//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: OSM geocoding and
//! routing over `integration_osm`, the tile map view, configuration loading
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod map;
pub mod telemetry;

pub use adapters::{NominatimGeocodingAdapter, OsrmRoutingAdapter};
pub use config::{AppConfig, ConfigError, MapConfig};
pub use map::{CenterMarker, MapSnapshot, RouteOverlay, TileLayer, TileMapView};
pub use telemetry::{LogFormat, LoggingConfig, init_logging};

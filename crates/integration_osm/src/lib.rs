//! OpenStreetMap service integration
//!
//! Provides address search via [Nominatim](https://nominatim.openstreetmap.org)
//! and driving routes via an [OSRM](https://project-osrm.org) route service.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] defines
//! free-text search, implemented by [`NominatimGeocodingClient`].
//! [`RoutingClient`] defines route computation between waypoints,
//! implemented by [`OsrmRoutingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_osm::{Coordinate, NominatimConfig, NominatimGeocodingClient, GeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let places = client.search("Ala-Too Square, Bishkek", true).await?;
//! let coordinate = places[0].coordinates()?;
//! ```

mod config;
mod error;
mod geocoding;
mod models;
mod routing;

pub use config::{NominatimConfig, OsrmConfig};
pub use error::OsmError;
pub use geocoding::{GeocodingClient, NominatimGeocodingClient};
pub use models::{Coordinate, NominatimPlace, OsrmRoute, OsrmRouteResponse};
pub use routing::{OsrmRoutingClient, RoutingClient};

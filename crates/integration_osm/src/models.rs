//! Wire models of the Nominatim and OSRM APIs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::OsmError;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `lon,lat` as used in OSRM URL paths
    pub(crate) fn to_osrm(self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

/// One entry of a Nominatim `/search` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NominatimPlace {
    /// Nominatim's internal place id
    #[serde(default)]
    pub place_id: Option<u64>,
    /// Full display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Address breakdown, present when `addressdetails=1` was requested
    #[serde(default)]
    pub address: HashMap<String, String>,
}

impl NominatimPlace {
    /// Parse the latitude and longitude strings
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if either value is not a number.
    pub fn coordinates(&self) -> Result<Coordinate, OsmError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| OsmError::ParseError(format!("Invalid latitude: {}", self.lat)))?;
        let lon: f64 = self
            .lon
            .trim()
            .parse()
            .map_err(|_| OsmError::ParseError(format!("Invalid longitude: {}", self.lon)))?;
        Ok(Coordinate::new(lat, lon))
    }
}

/// Response of the OSRM `route` service
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRouteResponse {
    /// `"Ok"` on success, an error code otherwise
    pub code: String,
    /// Human-readable error description
    #[serde(default)]
    pub message: Option<String>,
    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl OsrmRouteResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One OSRM route
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsrmRoute {
    /// Total distance in meters
    pub distance: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// GeoJSON line of the route (present with `geometries=geojson`)
    #[serde(default)]
    pub geometry: Option<GeoJsonLineString>,
}

impl OsrmRoute {
    /// Route line as coordinates, empty if the service sent no geometry
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.geometry
            .as_ref()
            .map(|line| {
                line.coordinates
                    .iter()
                    .map(|[lon, lat]| Coordinate::new(*lat, *lon))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// GeoJSON `LineString` geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoJsonLineString {
    /// Positions as `[lon, lat]`
    pub coordinates: Vec<[f64; 2]>,
}

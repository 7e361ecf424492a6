//! Adapters implementing application ports
//!
//! Each adapter wraps an `integration_osm` client and converts its wire
//! models and errors into application types.

mod nominatim_adapter;
mod osrm_adapter;

pub use nominatim_adapter::NominatimGeocodingAdapter;
pub use osrm_adapter::OsrmRoutingAdapter;

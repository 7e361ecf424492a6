//! Value Objects - Immutable, identity-less domain primitives

mod address_field;
mod geo_location;
mod route_control_id;
mod route_points;
mod route_summary;

pub use address_field::AddressField;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use route_control_id::RouteControlId;
pub use route_points::RoutePoints;
pub use route_summary::RouteSummary;

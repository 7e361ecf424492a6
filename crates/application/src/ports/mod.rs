//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod alert_port;
mod geocoding_port;
mod map_view_port;
mod routing_port;

#[cfg(test)]
pub use alert_port::MockAlertPort;
pub use alert_port::AlertPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodedPlace, GeocodingPort};
#[cfg(test)]
pub use map_view_port::MockMapViewPort;
pub use map_view_port::MapViewPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::{Route, RouteTotals, RoutingPort};

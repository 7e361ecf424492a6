//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Unknown address field name
    #[error("Invalid address field: {0}")]
    InvalidAddressField(String),

    /// A route needs at least an origin and a destination
    #[error("A route needs at least 2 waypoints, got {0}")]
    NotEnoughWaypoints(usize),

    /// Waypoint index outside the route
    #[error("Waypoint {index} out of range for a route with {len} waypoints")]
    WaypointOutOfRange { index: usize, len: usize },

    /// No route is currently attached to the map
    #[error("No route is currently displayed")]
    NoActiveRoute,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a waypoint out of range error
    pub const fn waypoint_out_of_range(index: usize, len: usize) -> Self {
        Self::WaypointOutOfRange { index, len }
    }
}

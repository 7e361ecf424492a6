//! Route control entity
//!
//! A route control is the request handed to the map: an ordered list of
//! waypoints plus display options. The map keeps at most one attached.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{GeoLocation, RouteControlId};

/// Display and interaction options of a route control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteControlOptions {
    /// Recompute the route while a waypoint is dragged
    pub route_while_dragging: bool,
    /// Show the turn-by-turn itinerary panel
    pub show_itinerary: bool,
    /// Place default markers on the waypoints
    pub waypoint_markers: bool,
}

impl Default for RouteControlOptions {
    fn default() -> Self {
        Self {
            route_while_dragging: true,
            show_itinerary: false,
            waypoint_markers: false,
        }
    }
}

/// A routing request between ordered waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteControl {
    id: RouteControlId,
    waypoints: Vec<GeoLocation>,
    options: RouteControlOptions,
}

impl RouteControl {
    /// Create a control with default options
    ///
    /// # Errors
    ///
    /// Returns `NotEnoughWaypoints` for fewer than two waypoints.
    pub fn new(waypoints: Vec<GeoLocation>) -> Result<Self, DomainError> {
        Self::with_options(waypoints, RouteControlOptions::default())
    }

    /// Create a control with explicit options
    pub fn with_options(
        waypoints: Vec<GeoLocation>,
        options: RouteControlOptions,
    ) -> Result<Self, DomainError> {
        if waypoints.len() < 2 {
            return Err(DomainError::NotEnoughWaypoints(waypoints.len()));
        }
        Ok(Self {
            id: RouteControlId::new(),
            waypoints,
            options,
        })
    }

    /// Control between an origin and a destination
    #[must_use]
    pub fn between(origin: GeoLocation, destination: GeoLocation) -> Self {
        Self {
            id: RouteControlId::new(),
            waypoints: vec![origin, destination],
            options: RouteControlOptions::default(),
        }
    }

    pub const fn id(&self) -> RouteControlId {
        self.id
    }

    pub fn waypoints(&self) -> &[GeoLocation] {
        &self.waypoints
    }

    pub const fn options(&self) -> RouteControlOptions {
        self.options
    }

    /// Move one waypoint to a new location
    ///
    /// # Errors
    ///
    /// Returns `WaypointOutOfRange` if `index` is not a waypoint of this control.
    pub fn move_waypoint(&mut self, index: usize, location: GeoLocation) -> Result<(), DomainError> {
        let len = self.waypoints.len();
        let slot = self
            .waypoints
            .get_mut(index)
            .ok_or(DomainError::waypoint_out_of_range(index, len))?;
        *slot = location;
        Ok(())
    }

    /// Replace all waypoints, keeping the id and options
    ///
    /// # Errors
    ///
    /// Returns `NotEnoughWaypoints` for fewer than two waypoints.
    pub fn set_waypoints(&mut self, waypoints: Vec<GeoLocation>) -> Result<(), DomainError> {
        if waypoints.len() < 2 {
            return Err(DomainError::NotEnoughWaypoints(waypoints.len()));
        }
        self.waypoints = waypoints;
        Ok(())
    }
}

//! Map view port
//!
//! The map owns the only route overlay. Callers go through this port to
//! attach, replace or remove it, so the map never shows two routes.

use domain::value_objects::{GeoLocation, RouteControlId};
use domain::RouteControl;
#[cfg(test)]
use mockall::automock;

/// Port for the interactive map
#[cfg_attr(test, automock)]
pub trait MapViewPort: Send + Sync {
    /// Attach a route control, detaching any control already attached
    fn attach_route(&self, control: RouteControl);

    /// Detach the given control
    ///
    /// Returns `false` without side effects if that control is not attached.
    fn detach_route(&self, id: RouteControlId) -> bool;

    /// Detach the current control (if any) and attach `control` in one step
    ///
    /// Returns the id of the control that was replaced.
    fn replace_route(&self, control: RouteControl) -> Option<RouteControlId>;

    /// Detach whatever control is attached
    fn clear_route(&self) -> Option<RouteControlId>;

    /// The control currently attached
    fn active_route(&self) -> Option<RouteControl>;

    /// Draw the computed route line for an attached control
    ///
    /// Returns `false` if `id` is no longer attached.
    fn draw_route(&self, id: RouteControlId, geometry: &[GeoLocation]) -> bool;

    /// Replace the waypoints of an attached control after a drag
    fn update_waypoints(&self, id: RouteControlId, waypoints: &[GeoLocation]) -> bool;
}

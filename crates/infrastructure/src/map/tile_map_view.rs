//! Tile map view with a single route overlay
//!
//! The view holds at most one [`RouteOverlay`]. Attaching a route control
//! registers a "routes found" listener for it; only a control with a
//! registered listener can get its line drawn. Detaching removes both.
//! Once unmounted (explicitly or on drop) the view releases everything and
//! ignores further overlays.

use std::collections::HashSet;

use application::ports::MapViewPort;
use domain::RouteControl;
use domain::value_objects::{GeoLocation, RouteControlId};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::MapConfig;
use super::TileLayer;

/// Labelled marker placed at the map center when mounted
#[derive(Debug, Clone, PartialEq)]
pub struct CenterMarker {
    pub location: GeoLocation,
    pub label: String,
}

/// The route currently shown on the map
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub control: RouteControl,
    /// Route line; empty until the routing service answers
    pub geometry: Vec<GeoLocation>,
}

/// Point-in-time view of the map for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct MapSnapshot {
    pub mounted: bool,
    pub center: GeoLocation,
    pub zoom: u8,
    pub attribution: String,
    pub center_tile_url: String,
    pub marker: Option<CenterMarker>,
    pub route_id: Option<RouteControlId>,
    pub waypoints: Vec<GeoLocation>,
    pub geometry_points: usize,
}

#[derive(Debug, Default)]
struct ViewState {
    mounted: bool,
    overlay: Option<RouteOverlay>,
    routes_found_listeners: HashSet<RouteControlId>,
}

impl ViewState {
    fn detach(&mut self) -> Option<RouteControlId> {
        let overlay = self.overlay.take()?;
        let id = overlay.control.id();
        self.routes_found_listeners.remove(&id);
        Some(id)
    }

    fn attach(&mut self, control: RouteControl) {
        self.routes_found_listeners.insert(control.id());
        self.overlay = Some(RouteOverlay {
            control,
            geometry: Vec::new(),
        });
    }

    fn overlay_mut(&mut self, id: RouteControlId) -> Option<&mut RouteOverlay> {
        if !self.routes_found_listeners.contains(&id) {
            return None;
        }
        self.overlay.as_mut().filter(|o| o.control.id() == id)
    }
}

/// Map view backed by an XYZ tile layer
#[derive(Debug)]
pub struct TileMapView {
    layer: TileLayer,
    center: GeoLocation,
    zoom: u8,
    marker: Option<CenterMarker>,
    state: Mutex<ViewState>,
}

impl TileMapView {
    /// Mount a map centered and zoomed as configured
    pub fn mount(config: &MapConfig) -> Self {
        let layer = TileLayer::new(
            config.tile_url_template.clone(),
            config.attribution.clone(),
            config.subdomains.clone(),
        );
        let marker = config.marker_label.as_ref().map(|label| CenterMarker {
            location: config.center,
            label: label.clone(),
        });

        info!(center = %config.center, zoom = config.zoom, "Map mounted");
        Self {
            layer,
            center: config.center,
            zoom: config.zoom,
            marker,
            state: Mutex::new(ViewState {
                mounted: true,
                ..ViewState::default()
            }),
        }
    }

    pub const fn layer(&self) -> &TileLayer {
        &self.layer
    }

    pub fn is_mounted(&self) -> bool {
        self.state.lock().mounted
    }

    /// Number of registered "routes found" listeners (0 or 1)
    pub fn listener_count(&self) -> usize {
        self.state.lock().routes_found_listeners.len()
    }

    /// The overlay currently shown
    pub fn overlay(&self) -> Option<RouteOverlay> {
        self.state.lock().overlay.clone()
    }

    /// Remove the map: releases the overlay and every listener
    ///
    /// Calling it again has no effect.
    pub fn unmount(&self) {
        let mut state = self.state.lock();
        if !state.mounted {
            return;
        }
        let released = state.detach();
        state.routes_found_listeners.clear();
        state.mounted = false;
        debug!(?released, "Map unmounted");
    }

    pub fn snapshot(&self) -> MapSnapshot {
        let state = self.state.lock();
        let overlay = state.overlay.as_ref();
        MapSnapshot {
            mounted: state.mounted,
            center: self.center,
            zoom: self.zoom,
            attribution: self.layer.attribution().to_string(),
            center_tile_url: self.layer.tile_url_at(self.center, self.zoom),
            marker: self.marker.clone(),
            route_id: overlay.map(|o| o.control.id()),
            waypoints: overlay
                .map(|o| o.control.waypoints().to_vec())
                .unwrap_or_default(),
            geometry_points: overlay.map_or(0, |o| o.geometry.len()),
        }
    }
}

impl Drop for TileMapView {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl MapViewPort for TileMapView {
    fn attach_route(&self, control: RouteControl) {
        self.replace_route(control);
    }

    fn detach_route(&self, id: RouteControlId) -> bool {
        let mut state = self.state.lock();
        if state.overlay.as_ref().map(|o| o.control.id()) != Some(id) {
            return false;
        }
        state.detach();
        debug!(%id, "Route control detached");
        true
    }

    fn replace_route(&self, control: RouteControl) -> Option<RouteControlId> {
        let mut state = self.state.lock();
        if !state.mounted {
            warn!(id = %control.id(), "Ignoring route control on unmounted map");
            return None;
        }
        let previous = state.detach();
        debug!(id = %control.id(), ?previous, "Route control attached");
        state.attach(control);
        previous
    }

    fn clear_route(&self) -> Option<RouteControlId> {
        self.state.lock().detach()
    }

    fn active_route(&self) -> Option<RouteControl> {
        self.state.lock().overlay.as_ref().map(|o| o.control.clone())
    }

    fn draw_route(&self, id: RouteControlId, geometry: &[GeoLocation]) -> bool {
        let mut state = self.state.lock();
        let Some(overlay) = state.overlay_mut(id) else {
            debug!(%id, "No routes-found listener for control");
            return false;
        };
        overlay.geometry = geometry.to_vec();
        true
    }

    fn update_waypoints(&self, id: RouteControlId, waypoints: &[GeoLocation]) -> bool {
        let mut state = self.state.lock();
        let Some(overlay) = state.overlay_mut(id) else {
            return false;
        };
        if let Err(e) = overlay.control.set_waypoints(waypoints.to_vec()) {
            warn!(%id, error = %e, "Rejected waypoint update");
            return false;
        }
        overlay.geometry.clear();
        true
    }
}

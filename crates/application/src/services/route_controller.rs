//! Route controller
//!
//! Builds a driving route between the two address fields: removes the
//! previous route, resolves both addresses, attaches a new route control to
//! the map and publishes the summary once the routing service answers.
//!
//! Each computation carries a generation number. Only the newest
//! computation may publish; older ones finish as [`RouteOutcome::Superseded`]
//! whether they succeeded or failed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::value_objects::{GeoLocation, RouteControlId, RoutePoints, RouteSummary};
use domain::{DomainError, RouteControl};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AlertPort, MapViewPort, Route, RoutingPort};
use crate::services::geocoding_service::GeocodingService;

/// Message of the alert shown when a route cannot be built
pub const ROUTE_FAILURE_ALERT: &str = "Could not build the route. Check the addresses.";

/// How a route computation ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteOutcome {
    /// The summary was published and the route drawn
    Published(RouteSummary),
    /// A newer computation started before this one finished
    Superseded,
}

#[derive(Debug, Default)]
struct RouteState {
    summary: Option<RouteSummary>,
    points: Option<RoutePoints>,
}

/// Resolves addresses and keeps the map's single route up to date
pub struct RouteController {
    geocoding: Arc<GeocodingService>,
    routing: Arc<dyn RoutingPort>,
    map: Arc<dyn MapViewPort>,
    alert: Arc<dyn AlertPort>,
    generation: AtomicU64,
    state: Mutex<RouteState>,
}

impl std::fmt::Debug for RouteController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteController")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl RouteController {
    pub fn new(
        geocoding: Arc<GeocodingService>,
        routing: Arc<dyn RoutingPort>,
        map: Arc<dyn MapViewPort>,
        alert: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            geocoding,
            routing,
            map,
            alert,
            generation: AtomicU64::new(0),
            state: Mutex::new(RouteState::default()),
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Build the route between two addresses
    ///
    /// On failure the user sees a single alert, the previous route stays
    /// removed and the published summary and points are left untouched.
    ///
    /// # Errors
    ///
    /// Returns the resolve error (`AddressNotFound`, `Transport`) or a
    /// `Routing` error if the service found no route.
    #[instrument(skip(self))]
    pub async fn compute_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteOutcome, ApplicationError> {
        if let Some(previous) = self.map.clear_route() {
            debug!(%previous, "Removed previous route");
        }
        let generation = self.next_generation();

        let resolved = tokio::try_join!(
            self.geocoding.resolve(origin),
            self.geocoding.resolve(destination)
        );
        let (from, to) = match resolved {
            Ok(points) => points,
            Err(e) => return self.fail(generation, None, e),
        };

        if !self.is_current(generation) {
            debug!(generation, "Route superseded before attaching");
            return Ok(RouteOutcome::Superseded);
        }

        let control = RouteControl::between(from, to);
        let id = control.id();
        let waypoints = control.waypoints().to_vec();
        self.map.replace_route(control);

        let routes = match self.routing.find_routes(&waypoints).await {
            Ok(routes) => routes,
            Err(e) => return self.fail(generation, Some(id), e),
        };

        match self.publish(generation, id, routes, Some(RoutePoints::new(from, to))) {
            Err(e) => self.fail(generation, Some(id), e),
            outcome => outcome,
        }
    }

    /// Move a waypoint of the displayed route and recompute it
    ///
    /// Routing failures while dragging are logged and keep the previous
    /// summary; no alert is shown.
    ///
    /// # Errors
    ///
    /// `NoActiveRoute` if no route is displayed, `WaypointOutOfRange` for a
    /// bad index, or the routing error.
    #[instrument(skip(self))]
    pub async fn drag_waypoint(
        &self,
        index: usize,
        location: GeoLocation,
    ) -> Result<RouteOutcome, ApplicationError> {
        let mut control = self.map.active_route().ok_or(DomainError::NoActiveRoute)?;
        control.move_waypoint(index, location)?;

        let generation = self.next_generation();
        if !self.map.update_waypoints(control.id(), control.waypoints()) {
            return Err(DomainError::NoActiveRoute.into());
        }

        let routes = match self.routing.find_routes(control.waypoints()).await {
            Ok(routes) => routes,
            Err(e) if self.is_current(generation) => {
                warn!(error = %e, "Rerouting after drag failed");
                return Err(e);
            },
            Err(_) => return Ok(RouteOutcome::Superseded),
        };

        self.publish(generation, control.id(), routes, None)
    }

    /// Apply a "routes found" result if it still belongs to the newest computation
    fn publish(
        &self,
        generation: u64,
        id: RouteControlId,
        routes: Vec<Route>,
        points: Option<RoutePoints>,
    ) -> Result<RouteOutcome, ApplicationError> {
        let attached = self.map.active_route().map(|control| control.id());
        if !self.is_current(generation) || attached != Some(id) {
            debug!(generation, "Discarding routes of superseded computation");
            return Ok(RouteOutcome::Superseded);
        }

        let route = routes
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::Routing("no route found".to_string()))?;
        let summary = route.summary();

        self.map.draw_route(id, &route.geometry);
        let mut state = self.state.lock();
        state.summary = Some(summary);
        if points.is_some() {
            state.points = points;
        }

        info!(%summary, "Route published");
        Ok(RouteOutcome::Published(summary))
    }

    fn fail(
        &self,
        generation: u64,
        attached: Option<RouteControlId>,
        error: ApplicationError,
    ) -> Result<RouteOutcome, ApplicationError> {
        if !self.is_current(generation) {
            debug!(generation, error = %error, "Ignoring failure of superseded computation");
            return Ok(RouteOutcome::Superseded);
        }

        if let Some(id) = attached {
            self.map.detach_route(id);
        }
        warn!(error = %error, "Failed to build route");
        self.alert.alert(ROUTE_FAILURE_ALERT);
        Err(error)
    }

    /// Summary of the most recently published route
    pub fn summary(&self) -> Option<RouteSummary> {
        self.state.lock().summary
    }

    /// Resolved endpoints of the most recently published route
    pub fn points(&self) -> Option<RoutePoints> {
        self.state.lock().points
    }
}

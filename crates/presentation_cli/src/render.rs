//! Plain-text rendering of the widget panels and the map

use std::fmt::Write;

use application::services::WidgetSnapshot;
use domain::value_objects::{AddressField, RoutePoints, RouteSummary};
use infrastructure::MapSnapshot;

pub const ROUTE_NOT_BUILT: &str = "Route not built yet.";
pub const POINTS_NOT_DETERMINED: &str = "Route points not determined yet.";

/// The route information panel
pub fn summary_panel(summary: Option<&RouteSummary>) -> String {
    let mut out = String::from("Route information\n");
    match summary {
        Some(summary) => {
            let _ = writeln!(out, "  Distance: {} km", summary.distance_km_text());
            let _ = writeln!(out, "  Estimated time: {} min", summary.eta_minutes_text());
        },
        None => {
            let _ = writeln!(out, "  {ROUTE_NOT_BUILT}");
        },
    }
    out
}

/// The route points panel
pub fn points_panel(points: Option<&RoutePoints>) -> String {
    let mut out = String::from("Route points\n");
    match points {
        Some(points) => {
            let _ = writeln!(out, "  Origin: {}", points.origin);
            let _ = writeln!(out, "  Destination: {}", points.destination);
        },
        None => {
            let _ = writeln!(out, "  {POINTS_NOT_DETERMINED}");
        },
    }
    out
}

/// A field's dropdown, numbered from 1
pub fn suggestion_list(field: AddressField, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!("No suggestions for {field}.\n");
    }
    let mut out = format!("Suggestions for {field}:\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {suggestion}", i + 1);
    }
    out
}

/// Both input fields with their dropdowns, followed by the panels
pub fn widget(snapshot: &WidgetSnapshot) -> String {
    let mut out = String::new();
    for field in AddressField::ALL {
        let state = snapshot.field(field);
        let _ = writeln!(out, "{}: {}", field.label(), state.query);
        for (i, suggestion) in state.suggestions.iter().enumerate() {
            let _ = writeln!(out, "    {}. {suggestion}", i + 1);
        }
    }
    out.push('\n');
    out.push_str(&summary_panel(snapshot.summary.as_ref()));
    out.push('\n');
    out.push_str(&points_panel(snapshot.points.as_ref()));
    out
}

pub fn map(snapshot: &MapSnapshot) -> String {
    if !snapshot.mounted {
        return "Map is not mounted.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Map center: {} (zoom {})", snapshot.center, snapshot.zoom);
    let _ = writeln!(out, "Center tile: {}", snapshot.center_tile_url);
    if let Some(marker) = &snapshot.marker {
        let _ = writeln!(out, "Marker: {} at {}", marker.label, marker.location);
    }
    match snapshot.route_id {
        Some(id) => {
            let _ = writeln!(out, "Route {id}:");
            for (i, waypoint) in snapshot.waypoints.iter().enumerate() {
                let _ = writeln!(out, "  waypoint {}: {waypoint}", i + 1);
            }
            let _ = writeln!(out, "  line points: {}", snapshot.geometry_points);
        },
        None => out.push_str("No route on the map.\n"),
    }
    let _ = writeln!(out, "{}", snapshot.attribution);
    out
}

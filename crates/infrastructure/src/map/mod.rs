//! Interactive map view
//!
//! A terminal-side model of the slippy map: tile layer, optional center
//! marker and the single route overlay. The view implements
//! [`application::ports::MapViewPort`].

mod tile_layer;
mod tile_map_view;

pub use tile_layer::{MAX_ZOOM, TileLayer};
pub use tile_map_view::{CenterMarker, MapSnapshot, RouteOverlay, TileMapView};

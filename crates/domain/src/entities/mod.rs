//! Domain entities - Objects with identity and lifecycle

mod route_control;

pub use route_control::{RouteControl, RouteControlOptions};

//! Domain layer for the route map widget
//!
//! Contains the coordinates, route summaries and route controls the widget
//! works with. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

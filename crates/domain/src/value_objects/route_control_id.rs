//! Route control identifier

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one route control attached to the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteControlId(Uuid);

impl RouteControlId {
    /// Create a new random route control ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a route control ID from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RouteControlId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RouteControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

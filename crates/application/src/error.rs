//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding returned no results for an address
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Network failure or non-2xx response from an external service
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Fetching suggestions failed
    #[error("Suggestion failure: {0}")]
    Suggestion(String),

    /// The routing service found no route
    #[error("Routing failed: {0}")]
    Routing(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

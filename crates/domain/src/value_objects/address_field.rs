//! The two address inputs of the route widget

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Which address input a query belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressField {
    /// Start of the route
    Origin,
    /// End of the route
    Destination,
}

impl AddressField {
    /// Both fields in waypoint order
    pub const ALL: [Self; 2] = [Self::Origin, Self::Destination];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

impl FromStr for AddressField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "origin" | "from" | "o" => Ok(Self::Origin),
            "destination" | "to" | "d" => Ok(Self::Destination),
            other => Err(DomainError::InvalidAddressField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("origin".parse::<AddressField>().unwrap(), AddressField::Origin);
        assert_eq!("FROM".parse::<AddressField>().unwrap(), AddressField::Origin);
        assert_eq!("d".parse::<AddressField>().unwrap(), AddressField::Destination);
        assert_eq!(" to ".parse::<AddressField>().unwrap(), AddressField::Destination);
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "via".parse::<AddressField>().unwrap_err();
        assert!(err.to_string().contains("via"));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(AddressField::Origin.to_string(), "origin");
        assert_eq!(AddressField::Destination.to_string(), "destination");
        assert_eq!(AddressField::Destination.label(), "Destination");
    }
}

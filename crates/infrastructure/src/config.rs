//! Application configuration
//!
//! Loaded from an optional TOML file, then overridden by `ROUTEMAP__*`
//! environment variables (`ROUTEMAP__ROUTING__PROFILE=foot`). Every field
//! has a default, so an empty configuration is valid.

use std::path::Path;

use application::services::GeocodingSettings;
use domain::value_objects::GeoLocation;
use integration_osm::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::map::MAX_ZOOM;
use crate::telemetry::LoggingConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ROUTEMAP";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range or malformed
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The configuration could not be rendered as TOML
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Environment overrides, e.g. `ROUTEMAP__MAP__ZOOM=15`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("map.subdomains")
        .try_parsing(true)
}

/// Map view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial map center
    #[serde(default = "GeoLocation::bishkek")]
    pub center: GeoLocation,

    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// XYZ tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    #[serde(default = "default_tile_url_template")]
    pub tile_url_template: String,

    /// Attribution shown with the tiles
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Values substituted for `{s}`
    #[serde(default = "default_subdomains")]
    pub subdomains: Vec<String>,

    /// Label of a marker placed at the center (no marker if unset)
    #[serde(default)]
    pub marker_label: Option<String>,
}

const fn default_zoom() -> u8 {
    13
}

fn default_tile_url_template() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "© OpenStreetMap contributors".to_string()
}

fn default_subdomains() -> Vec<String> {
    ["a", "b", "c"].iter().map(ToString::to_string).collect()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoLocation::bishkek(),
            zoom: default_zoom(),
            tile_url_template: default_tile_url_template(),
            attribution: default_attribution(),
            subdomains: default_subdomains(),
            marker_label: None,
        }
    }
}

impl MapConfig {
    fn validate(&self) -> Result<(), String> {
        if GeoLocation::new(self.center.latitude(), self.center.longitude()).is_err() {
            return Err(format!("map.center out of range: {}", self.center));
        }
        if self.zoom > MAX_ZOOM {
            return Err(format!("map.zoom must be 0..={MAX_ZOOM}, got {}", self.zoom));
        }
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.tile_url_template.contains(placeholder) {
                return Err(format!("map.tile_url_template lacks {placeholder}"));
            }
        }
        if self.tile_url_template.contains("{s}") && self.subdomains.is_empty() {
            return Err("map.subdomains must not be empty when the template uses {s}".to_string());
        }
        let sample = self
            .tile_url_template
            .replace("{s}", self.subdomains.first().map_or("", String::as_str))
            .replace(['{', '}'], "");
        Url::parse(&sample).map_err(|e| format!("map.tile_url_template is not a URL: {e}"))?;
        Ok(())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Map view
    #[serde(default)]
    pub map: MapConfig,

    /// Nominatim geocoding service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM routing service
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Suggestion behaviour (city suffix, minimum query length)
    #[serde(default)]
    pub widget: GeocodingSettings,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, `routemap.toml` in the working directory is used if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("routemap").required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.map.validate().map_err(ConfigError::Invalid)?;
        self.geocoding
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("geocoding: {e}")))?;
        self.routing
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("routing: {e}")))?;

        if self.widget.city_suffix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "widget.city_suffix must not be empty".to_string(),
            ));
        }
        if self.widget.min_query_chars == 0 {
            return Err(ConfigError::Invalid(
                "widget.min_query_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map.center, GeoLocation::bishkek());
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.map.subdomains, vec!["a", "b", "c"]);
        assert_eq!(config.widget.city_suffix, "Bishkek");
        assert_eq!(config.widget.min_query_chars, 2);
        assert_eq!(config.routing.profile, "driving");
    }

    #[test]
    fn rejects_zoom_out_of_range() {
        let mut config = AppConfig::default();
        config.map.zoom = 20;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_center_out_of_range() {
        let mut config = AppConfig::default();
        config.map.center = GeoLocation::new_unchecked(120.0, 74.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_template_without_placeholders() {
        let mut config = AppConfig::default();
        config.map.tile_url_template = "https://tiles.example/{z}.png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_subdomain_template_without_subdomains() {
        let mut config = AppConfig::default();
        config.map.subdomains.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_city_suffix() {
        let mut config = AppConfig::default();
        config.widget.city_suffix = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_service_url() {
        let mut config = AppConfig::default();
        config.routing.base_url = "router".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("routing"));
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let vars = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(vars))
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("ROUTEMAP__ROUTING__PROFILE", "foot"),
                ("ROUTEMAP__MAP__ZOOM", "15"),
                ("ROUTEMAP__WIDGET__MIN_QUERY_CHARS", "3"),
                ("ROUTEMAP__MAP__SUBDOMAINS", "x,y"),
            ]),
        )
        .unwrap();

        assert_eq!(config.routing.profile, "foot");
        assert_eq!(config.map.zoom, 15);
        assert_eq!(config.widget.min_query_chars, 3);
        assert_eq!(config.map.subdomains, vec!["x", "y"]);
        assert_eq!(config.geocoding, NominatimConfig::default());
    }

    #[test]
    fn environment_values_are_validated() {
        let err = AppConfig::load_with_env(None, env(&[("ROUTEMAP__MAP__ZOOM", "25")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config =
            AppConfig::load_with_env(None, env(&[("OTHER__MAP__ZOOM", "3")])).unwrap();
        assert_eq!(config.map.zoom, 13);
    }

    #[test]
    fn toml_rendering_contains_sections() {
        let rendered = AppConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[map]"));
        assert!(rendered.contains("[geocoding]"));
        assert!(rendered.contains("[routing]"));
        assert!(rendered.contains("[widget]"));
        assert!(rendered.contains("city_suffix = \"Bishkek\""));
    }

    #[test]
    fn rendered_toml_parses_back() {
        let mut config = AppConfig::default();
        config.map.marker_label = Some("Center".to_string());
        let parsed: AppConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}

//! Configuration file loading tests

use std::io::Write;

use infrastructure::{AppConfig, ConfigError};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = write_config(
        r#"
[map]
zoom = 14
marker_label = "Bishkek city center"

[routing]
base_url = "http://localhost:5000"
"#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.map.zoom, 14);
    assert_eq!(config.map.marker_label.as_deref(), Some("Bishkek city center"));
    assert_eq!(config.routing.base_url, "http://localhost:5000");
    assert_eq!(config.routing.profile, "driving");
    assert_eq!(config.geocoding.base_url, "https://nominatim.openstreetmap.org");
    assert_eq!(config.widget.city_suffix, "Bishkek");
}

#[test]
fn test_load_center_and_widget_settings() {
    let file = write_config(
        r#"
[map.center]
latitude = 42.84
longitude = 74.6

[widget]
city_suffix = "Osh"
min_query_chars = 3

[logging]
format = "json"
"#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert!((config.map.center.latitude() - 42.84).abs() < f64::EPSILON);
    assert_eq!(config.widget.city_suffix, "Osh");
    assert_eq!(config.widget.min_query_chars, 3);
    assert_eq!(config.logging.format, infrastructure::LogFormat::Json);
}

#[test]
fn test_load_rejects_invalid_values() {
    let file = write_config(
        r#"
[geocoding]
base_url = "not a url"
"#,
    );

    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_load_rejects_malformed_file() {
    let file = write_config("[map\nzoom = ");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(AppConfig::load(Some(&missing)).is_err());
}

#[test]
fn test_rendered_config_loads_back() {
    let original = AppConfig::default();
    let file = write_config(&original.to_toml().unwrap());

    let loaded = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(loaded, original);
}

//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;
use volunteerhub_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use volunteerhub_core::models::ValidityMode;

const ENV_KEYS: [&str; 4] = [
    "VOLUNTEERHUB_RADIUS_KM",
    "VOLUNTEERHUB_LOCATION_TIMEOUT_MS",
    "VOLUNTEERHUB_INITIAL_SPAN",
    "VOLUNTEERHUB_VALIDITY",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file("radius_km = 25.0\nvalidity = \"Strict\"");

    env::set_var("VOLUNTEERHUB_RADIUS_KM", "3.5");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.radius_km.value, 3.5);
    assert_eq!(config.radius_km.source, ConfigSource::Environment);
    // File value survives where env is silent
    assert_eq!(config.validity.value, ValidityMode::Strict);
    assert_eq!(config.validity.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var("VOLUNTEERHUB_LOCATION_TIMEOUT_MS", "2000");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.location_timeout_ms.value, 2000);

    config.update_from_cli(CliConfigOverrides {
        location_timeout_ms: Some(250),
        ..Default::default()
    });

    assert_eq!(config.location_timeout_ms.value, 250);
    assert_eq!(config.location_timeout_ms.source, ConfigSource::Cli);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("VOLUNTEERHUB_RADIUS_KM", "-4");
    env::set_var("VOLUNTEERHUB_INITIAL_SPAN", "wide");
    env::set_var("VOLUNTEERHUB_VALIDITY", "sometimes");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.radius_km.value, 10.0);
    assert_eq!(config.radius_km.source, ConfigSource::Default);
    assert_eq!(config.initial_span.source, ConfigSource::Default);
    assert_eq!(config.validity.value, ValidityMode::Lenient);

    clear_env();
}

#[test]
#[serial]
fn test_partial_file_configuration() {
    clear_env();
    let file = config_file("initial_span = 0.2\n# Only override the span");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.initial_span.value, 0.2);
    assert_eq!(config.initial_span.source, ConfigSource::File);
    assert_eq!(config.radius_km.source, ConfigSource::Default);
    assert_eq!(config.location_timeout_ms.source, ConfigSource::Default);
}

#[test]
fn test_missing_file_is_config_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/volunteerhub.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_config_error() {
    let file = config_file("radius_km = = 3");
    let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();

    assert!(err.to_string().contains("Failed to parse TOML"));
}

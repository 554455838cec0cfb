use crate::error::{Result, VolunteerHubError};
use crate::models::ValidityMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default search radius for nearby queries, in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Default budget for a device location lookup, in milliseconds
pub const DEFAULT_LOCATION_TIMEOUT_MS: u64 = 5000;

/// Default latitude/longitude span of the initial map region, in degrees
pub const DEFAULT_INITIAL_SPAN: f64 = 0.05;

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "volunteerhub.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for VolunteerHub queries
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub radius_km: ConfigValue<f64>,
    pub location_timeout_ms: ConfigValue<u64>,
    pub initial_span: ConfigValue<f64>,
    pub validity: ConfigValue<ValidityMode>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            radius_km: ConfigValue::new(DEFAULT_RADIUS_KM, ConfigSource::Default),
            location_timeout_ms: ConfigValue::new(
                DEFAULT_LOCATION_TIMEOUT_MS,
                ConfigSource::Default,
            ),
            initial_span: ConfigValue::new(DEFAULT_INITIAL_SPAN, ConfigSource::Default),
            validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| VolunteerHubError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| VolunteerHubError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius_km) = file_config.radius_km {
            self.radius_km.update(check_non_negative(radius_km, "radius_km")?, ConfigSource::File);
        }

        if let Some(timeout) = file_config.location_timeout_ms {
            self.location_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(span) = file_config.initial_span {
            self.initial_span.update(check_non_negative(span, "initial_span")?, ConfigSource::File);
        }

        if let Some(validity) = file_config.validity {
            self.validity.update(validity, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // VOLUNTEERHUB_RADIUS_KM
        if let Ok(radius_str) = env::var("VOLUNTEERHUB_RADIUS_KM") {
            match parse_radius(&radius_str) {
                Ok(radius) => self.radius_km.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VOLUNTEERHUB_RADIUS_KM value '{}': expected a non-negative number",
                    radius_str
                ),
            }
        }

        // VOLUNTEERHUB_LOCATION_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("VOLUNTEERHUB_LOCATION_TIMEOUT_MS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => self.location_timeout_ms.update(timeout, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VOLUNTEERHUB_LOCATION_TIMEOUT_MS value '{}': expected milliseconds",
                    timeout_str
                ),
            }
        }

        // VOLUNTEERHUB_INITIAL_SPAN
        if let Ok(span_str) = env::var("VOLUNTEERHUB_INITIAL_SPAN") {
            match parse_span(&span_str) {
                Ok(span) => self.initial_span.update(span, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VOLUNTEERHUB_INITIAL_SPAN value '{}': expected degrees",
                    span_str
                ),
            }
        }

        // VOLUNTEERHUB_VALIDITY
        if let Ok(validity_str) = env::var("VOLUNTEERHUB_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VOLUNTEERHUB_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(radius_km) = overrides.radius_km {
            self.radius_km.update(radius_km, ConfigSource::Cli);
        }

        if let Some(timeout) = overrides.location_timeout_ms {
            self.location_timeout_ms.update(timeout, ConfigSource::Cli);
        }

        if let Some(span) = overrides.initial_span {
            self.initial_span.update(span, ConfigSource::Cli);
        }

        if let Some(validity) = overrides.validity {
            self.validity.update(validity, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "radius_km".to_string(),
            (format!("{} km", self.radius_km.value), self.radius_km.source),
        );

        map.insert(
            "location_timeout_ms".to_string(),
            (format!("{} ms", self.location_timeout_ms.value), self.location_timeout_ms.source),
        );

        map.insert(
            "initial_span".to_string(),
            (format!("{}°", self.initial_span.value), self.initial_span.source),
        );

        map.insert(
            "validity".to_string(),
            (format!("{:?}", self.validity.value), self.validity.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    radius_km: Option<f64>,
    location_timeout_ms: Option<u64>,
    initial_span: Option<f64>,
    validity: Option<ValidityMode>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub radius_km: Option<f64>,
    pub location_timeout_ms: Option<u64>,
    pub initial_span: Option<f64>,
    pub validity: Option<ValidityMode>,
}

/// Parse a search radius in kilometers
pub fn parse_radius(s: &str) -> Result<f64> {
    parse_non_negative(s, "radius_km")
}

/// Parse a map span in degrees
pub fn parse_span(s: &str) -> Result<f64> {
    parse_non_negative(s, "initial_span")
}

fn parse_non_negative(s: &str, key: &str) -> Result<f64> {
    let value = s.trim().parse::<f64>().map_err(|e| VolunteerHubError::ConfigInvalid {
        key: key.to_string(),
        reason: format!("'{}' is not a number: {}", s, e),
    })?;

    check_non_negative(value, key)
}

fn check_non_negative(value: f64, key: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(VolunteerHubError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("{} must be a finite, non-negative number", value),
        });
    }

    Ok(value)
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(VolunteerHubError::ConfigInvalid {
            key: "validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.radius_km.value, 10.0);
        assert_eq!(config.radius_km.source, ConfigSource::Default);
        assert_eq!(config.location_timeout_ms.value, 5000);
        assert_eq!(config.initial_span.value, 0.05);
        assert_eq!(config.validity.value, ValidityMode::Lenient);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(1.0, ConfigSource::Default);

        // File should override default
        value.update(2.0, ConfigSource::File);
        assert_eq!(value.value, 2.0);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(3.0, ConfigSource::Environment);
        assert_eq!(value.value, 3.0);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(4.0, ConfigSource::Cli);
        assert_eq!(value.value, 4.0);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(5.0, ConfigSource::File);
        assert_eq!(value.value, 4.0);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
radius_km = 25.0
location_timeout_ms = 1500
initial_span = 0.1
validity = "Strict"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.radius_km.value, 25.0);
        assert_eq!(config.radius_km.source, ConfigSource::File);
        assert_eq!(config.location_timeout_ms.value, 1500);
        assert_eq!(config.initial_span.value, 0.1);
        assert_eq!(config.validity.value, ValidityMode::Strict);
    }

    #[test]
    fn test_file_rejects_negative_radius() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "radius_km = -3.0").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(VolunteerHubError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            radius_km: Some(2.5),
            location_timeout_ms: None,
            initial_span: None,
            validity: Some(ValidityMode::Strict),
        };

        config.update_from_cli(overrides);

        assert_eq!(config.radius_km.value, 2.5);
        assert_eq!(config.radius_km.source, ConfigSource::Cli);
        assert_eq!(config.validity.value, ValidityMode::Strict);
        // These should still be defaults
        assert_eq!(config.location_timeout_ms.source, ConfigSource::Default);
        assert_eq!(config.initial_span.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_radius() {
        assert_eq!(parse_radius("10").unwrap(), 10.0);
        assert_eq!(parse_radius(" 0.5 ").unwrap(), 0.5);
        assert_eq!(parse_radius("0").unwrap(), 0.0);
        assert!(parse_radius("-1").is_err());
        assert!(parse_radius("NaN").is_err());
        assert!(parse_radius("far").is_err());
    }

    #[test]
    fn test_parse_validity_mode() {
        assert_eq!(parse_validity_mode("strict").unwrap(), ValidityMode::Strict);
        assert_eq!(parse_validity_mode("LENIENT").unwrap(), ValidityMode::Lenient);
        assert!(parse_validity_mode("invalid").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("radius_km"));
        assert!(map.contains_key("location_timeout_ms"));
        assert!(map.contains_key("initial_span"));
        assert!(map.contains_key("validity"));

        let (radius_value, radius_source) = &map["radius_km"];
        assert_eq!(radius_value, "10 km");
        assert_eq!(*radius_source, ConfigSource::Default);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use super::geojson::events_from_geojson;
use crate::error::{Result, VolunteerHubError};
use crate::models::Event;
use crate::ports::EventSource;

/// Event catalog stored in a file
///
/// Accepts either a JSON array of events or a GeoJSON FeatureCollection of
/// Point features.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for JsonFileSource {
    fn load_events(&self) -> Result<Vec<Event>> {
        let content = fs::read_to_string(&self.path)?;
        parse_events(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse an event catalog, detecting the format from the document root
pub fn parse_events(content: &str) -> Result<Vec<Event>> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        VolunteerHubError::SourceFormat { format: "JSON".to_string(), reason: e.to_string() }
    })?;

    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| VolunteerHubError::Serialization(format!("Invalid event: {}", e))),
        serde_json::Value::Object(_) if value.get("type").is_some() => {
            let geojson = geojson::GeoJson::from_json_value(value).map_err(|e| {
                VolunteerHubError::SourceFormat {
                    format: "GeoJSON".to_string(),
                    reason: e.to_string(),
                }
            })?;
            events_from_geojson(&geojson)
        }
        _ => Err(VolunteerHubError::SourceFormat {
            format: "JSON".to_string(),
            reason: "expected an array of events or a GeoJSON FeatureCollection".to_string(),
        }),
    }
}

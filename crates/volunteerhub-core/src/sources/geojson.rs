use geojson::{Feature, GeoJson};
use serde_json::Value as JsonValue;

use crate::error::{Result, VolunteerHubError};
use crate::models::{Event, EventId};

/// Convert GeoJSON Point features into events
///
/// The event id comes from the `id` property, then the feature id, then the
/// feature position. The name comes from the `name` property.
pub fn events_from_geojson(geojson: &GeoJson) -> Result<Vec<Event>> {
    match geojson {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| event_from_feature(feature, idx))
            .collect(),
        GeoJson::Feature(feature) => Ok(vec![event_from_feature(feature, 0)?]),
        GeoJson::Geometry(_) => Err(format_error("bare geometry has no event properties")),
    }
}

fn event_from_feature(feature: &Feature, idx: usize) -> Result<Event> {
    let (longitude, latitude) = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(geojson::Value::Point(coords)) if coords.len() >= 2 => (coords[0], coords[1]),
        Some(_) => {
            return Err(format_error(&format!("feature {} is not a Point", idx)));
        }
        None => {
            return Err(format_error(&format!("feature {} has no geometry", idx)));
        }
    };

    let id = string_property(feature, "id")
        .or_else(|| {
            feature.id.as_ref().map(|id| match id {
                geojson::feature::Id::String(s) => s.clone(),
                geojson::feature::Id::Number(n) => n.to_string(),
            })
        })
        .unwrap_or_else(|| idx.to_string());

    let name = string_property(feature, "name")
        .ok_or_else(|| format_error(&format!("feature {} has no name property", idx)))?;

    Ok(Event {
        id: EventId::new(id),
        name,
        latitude,
        longitude,
        date: string_property(feature, "date"),
        time: string_property(feature, "time"),
        location: string_property(feature, "location"),
    })
}

fn string_property(feature: &Feature, key: &str) -> Option<String> {
    match feature.property(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn format_error(reason: &str) -> VolunteerHubError {
    VolunteerHubError::SourceFormat { format: "GeoJSON".to_string(), reason: reason.to_string() }
}

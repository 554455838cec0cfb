//! GeoJSON export of query results.

use geojson::{feature, Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::Value as JsonValue;
use volunteerhub_core::models::Event;

use crate::spatial::NearbyEvent;

/// Events as a FeatureCollection of Points
pub fn events_to_geojson<'a, I>(events: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a Event>,
{
    let features = events.into_iter().map(|event| event_feature(event, None)).collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// Ranked nearby events, with a `distance_km` property on each feature
pub fn nearby_to_geojson(nearby: &[NearbyEvent<'_>]) -> FeatureCollection {
    let features = nearby
        .iter()
        .map(|entry| event_feature(entry.event, Some(entry.distance_km)))
        .collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn event_feature(event: &Event, distance_km: Option<f64>) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), JsonValue::from(event.id.to_string()));
    properties.insert("name".to_string(), JsonValue::from(event.name.clone()));

    if let Some(ref date) = event.date {
        properties.insert("date".to_string(), JsonValue::from(date.clone()));
    }
    if let Some(ref time) = event.time {
        properties.insert("time".to_string(), JsonValue::from(time.clone()));
    }
    if let Some(ref location) = event.location {
        properties.insert("location".to_string(), JsonValue::from(location.clone()));
    }
    if let Some(distance) = distance_km {
        properties.insert("distance_km".to_string(), JsonValue::from(distance));
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![event.longitude, event.latitude]))),
        id: Some(feature::Id::String(event.id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::rank_by_distance;
    use volunteerhub_core::sources::geojson::events_from_geojson;
    use volunteerhub_core::sources::SampleEventSource;

    #[test]
    fn test_export_reads_back() {
        let events = SampleEventSource::events();
        let collection = events_to_geojson(&events);

        let restored = events_from_geojson(&geojson::GeoJson::FeatureCollection(collection)).unwrap();
        assert_eq!(restored, events);
    }

    #[test]
    fn test_point_axis_order() {
        let events = vec![Event::new("e1", "Community Cleanup", 37.7749, -122.4194)];
        let collection = events_to_geojson(&events);

        let json = serde_json::to_value(&collection).unwrap();
        let coords = &json["features"][0]["geometry"]["coordinates"];
        assert_eq!(coords[0], -122.4194);
        assert_eq!(coords[1], 37.7749);
    }

    #[test]
    fn test_nearby_carries_distance() {
        let events = SampleEventSource::events();
        let ranked = rank_by_distance(&events, &events[0].reference_point(), 10.0);
        let collection = nearby_to_geojson(&ranked);

        assert_eq!(collection.features.len(), 3);
        assert_eq!(
            collection.features[0].property("distance_km"),
            Some(&JsonValue::from(0.0))
        );
    }
}

//! End-to-end scenarios over the sample San Francisco catalog.

use volunteerhub_core::models::{Event, ReferencePoint, ReferenceSource, ValidityMode, Viewport};
use volunteerhub_core::sources::SampleEventSource;
use volunteerhub_geo::reference::{FixedLocationProvider, UnavailableLocationProvider};
use volunteerhub_geo::{find_nearby, GeoEventIndex, ReferencePointResolver};

fn scenario_events() -> Vec<Event> {
    vec![
        Event::new("e1", "Community Cleanup", 37.7749, -122.4194),
        Event::new("e2", "Food Drive", 37.7849, -122.4094),
        Event::new("e3", "Park Restoration", 37.7649, -122.4294),
    ]
}

fn ids(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn scenario_viewport_follows_window_arithmetic() {
    let index = GeoEventIndex::from_events(scenario_events(), ValidityMode::Strict).unwrap();

    // e2 and e3 sit 0.01° from the center, inside the ±0.025° window
    let wide = Viewport::new(37.7749, -122.4194, 0.05, 0.05);
    assert_eq!(ids(&index.visible(&wide).unwrap()), vec!["e1", "e2", "e3"]);

    // A ±0.005° window leaves only the center event
    let narrow = Viewport::new(37.7749, -122.4194, 0.01, 0.01);
    assert_eq!(ids(&index.visible(&narrow).unwrap()), vec!["e1"]);
}

#[test]
fn scenario_nearby_from_first_event() {
    let events = scenario_events();
    let nearby = find_nearby(&events, &events[0].reference_point(), 10.0);

    assert_eq!(ids(&nearby), vec!["e1", "e2", "e3"]);
}

#[test]
fn scenario_keyword_food() {
    let index = GeoEventIndex::from_events(scenario_events(), ValidityMode::Strict).unwrap();
    let matched = index.search("food");

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Food Drive");
}

#[test]
fn scenario_zero_radius() {
    let events = scenario_events();
    let reference = ReferencePoint::new(37.7749, -122.4194);

    assert_eq!(ids(&find_nearby(&events, &reference, 0.0)), vec!["e1"]);
}

#[tokio::test]
async fn scenario_nearby_search_with_failed_location() {
    let index = GeoEventIndex::from_source(&SampleEventSource, ValidityMode::Lenient).unwrap();
    let provider = UnavailableLocationProvider::new("location services disabled");

    let resolved = ReferencePointResolver::default()
        .resolve(Some(&provider), index.events())
        .await
        .unwrap();
    let nearby = index.nearby(&resolved.point, 10.0).unwrap();

    assert!(matches!(resolved.source, ReferenceSource::FallbackEvent(_)));
    assert_eq!(ids(&nearby), vec!["e1", "e2", "e3"]);
}

#[tokio::test]
async fn scenario_nearby_search_far_from_catalog() {
    let index = GeoEventIndex::from_source(&SampleEventSource, ValidityMode::Lenient).unwrap();
    // Device in New York, catalog in San Francisco
    let provider = FixedLocationProvider::new(40.7128, -74.0060);

    let resolved = ReferencePointResolver::default()
        .resolve(Some(&provider), index.events())
        .await
        .unwrap();

    assert_eq!(resolved.source, ReferenceSource::Device);
    assert!(index.nearby(&resolved.point, 10.0).unwrap().is_empty());
}

//! Deep links that open an event in the platform's map application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use volunteerhub_core::error::VolunteerHubError;
use volunteerhub_core::models::Event;

const DEFAULT_LABEL: &str = "Event";

/// Platform the links are built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapPlatform {
    Ios,
    Android,
    #[default]
    Web,
}

impl fmt::Display for MapPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapPlatform::Ios => f.write_str("ios"),
            MapPlatform::Android => f.write_str("android"),
            MapPlatform::Web => f.write_str("web"),
        }
    }
}

impl FromStr for MapPlatform {
    type Err = VolunteerHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(MapPlatform::Ios),
            "android" => Ok(MapPlatform::Android),
            "web" => Ok(MapPlatform::Web),
            _ => Err(VolunteerHubError::ConfigInvalid {
                key: "platform".to_string(),
                reason: format!("Unknown platform: {}. Use ios, android, or web", s),
            }),
        }
    }
}

/// Apple Maps link with a pin label
pub fn apple_maps_url(latitude: f64, longitude: f64, label: &str) -> String {
    format!("http://maps.apple.com/?ll={},{}&q={}", latitude, longitude, encode_label(label))
}

/// Android `geo:` URI, opened by the user's preferred maps app
pub fn geo_uri(latitude: f64, longitude: f64, label: &str) -> String {
    format!(
        "geo:{lat},{lon}?q={lat},{lon}({label})",
        lat = latitude,
        lon = longitude,
        label = encode_label(label)
    )
}

/// Google Maps search link, usable from any browser
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={},{}", latitude, longitude)
}

/// Candidate links for an event, in the order the platform should try them
///
/// iOS gets Apple Maps only. Android tries the `geo:` URI, then the web link.
pub fn map_links(event: &Event, platform: MapPlatform) -> Vec<String> {
    let (lat, lon) = (event.latitude, event.longitude);

    match platform {
        MapPlatform::Ios => vec![apple_maps_url(lat, lon, &event.name)],
        MapPlatform::Android => vec![geo_uri(lat, lon, &event.name), google_maps_url(lat, lon)],
        MapPlatform::Web => vec![google_maps_url(lat, lon)],
    }
}

fn encode_label(label: &str) -> String {
    let label = if label.is_empty() { DEFAULT_LABEL } else { label };
    urlencoding::encode(label).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_drive() -> Event {
        Event::new("e2", "Food Drive", 37.7849, -122.4094)
    }

    #[test]
    fn test_apple_maps_url() {
        assert_eq!(
            apple_maps_url(37.7849, -122.4094, "Food Drive"),
            "http://maps.apple.com/?ll=37.7849,-122.4094&q=Food%20Drive"
        );
    }

    #[test]
    fn test_geo_uri() {
        assert_eq!(
            geo_uri(37.7849, -122.4094, "Food Drive"),
            "geo:37.7849,-122.4094?q=37.7849,-122.4094(Food%20Drive)"
        );
    }

    #[test]
    fn test_google_maps_url() {
        assert_eq!(
            google_maps_url(37.7849, -122.4094),
            "https://www.google.com/maps/search/?api=1&query=37.7849,-122.4094"
        );
    }

    #[test]
    fn test_empty_label_defaults_to_event() {
        assert!(apple_maps_url(0.0, 0.0, "").ends_with("&q=Event"));
    }

    #[test]
    fn test_label_is_percent_encoded() {
        let url = apple_maps_url(0.0, 0.0, "Market St & 5th");
        assert!(url.ends_with("&q=Market%20St%20%26%205th"));
    }

    #[test]
    fn test_platform_order() {
        let event = food_drive();

        let ios = map_links(&event, MapPlatform::Ios);
        assert_eq!(ios.len(), 1);
        assert!(ios[0].starts_with("http://maps.apple.com/"));

        let android = map_links(&event, MapPlatform::Android);
        assert_eq!(android.len(), 2);
        assert!(android[0].starts_with("geo:"));
        assert!(android[1].starts_with("https://www.google.com/maps/"));

        let web = map_links(&event, MapPlatform::Web);
        assert_eq!(web, vec![google_maps_url(37.7849, -122.4094)]);
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("iOS".parse::<MapPlatform>().unwrap(), MapPlatform::Ios);
        assert_eq!("android".parse::<MapPlatform>().unwrap(), MapPlatform::Android);
        assert!("windows-phone".parse::<MapPlatform>().is_err());
        assert_eq!(MapPlatform::Android.to_string(), "android");
    }
}

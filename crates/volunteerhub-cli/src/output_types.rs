use serde::Serialize;
use tabled::Tabled;
use volunteerhub_core::config::ConfigSource;
use volunteerhub_core::models::{Event, MembershipSet, ResolvedReference, Viewport};

/// One event in command output
#[derive(Debug, Serialize)]
pub struct EventItem {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub joined: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl EventItem {
    pub fn new(event: &Event, membership: &MembershipSet) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            latitude: event.latitude,
            longitude: event.longitude,
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            joined: membership.is_joined(&event.id),
            distance_km: None,
        }
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}

/// Table row for human output
#[derive(Tabled)]
pub struct EventRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "When")]
    pub when: String,
    #[tabled(rename = "Where")]
    pub place: String,
    #[tabled(rename = "Position")]
    pub position: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
    #[tabled(rename = "Action")]
    pub action: String,
}

impl From<&EventItem> for EventRow {
    fn from(item: &EventItem) -> Self {
        let when = match (&item.date, &item.time) {
            (Some(date), Some(time)) => format!("{} · {}", date, time),
            (Some(date), None) => date.clone(),
            (None, Some(time)) => time.clone(),
            (None, None) => "-".to_string(),
        };

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            when,
            place: item.location.clone().unwrap_or_else(|| "-".to_string()),
            position: format!("{:.4}, {:.4}", item.latitude, item.longitude),
            distance: item
                .distance_km
                .map(|d| format!("{:.2} km", d))
                .unwrap_or_else(|| "-".to_string()),
            action: if item.joined { "Leave" } else { "Join" }.to_string(),
        }
    }
}

/// Bounding box of the catalog
#[derive(Debug, Serialize)]
pub struct CatalogExtent {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Output for events, search and joined commands
#[derive(Debug, Serialize)]
pub struct EventListOutput {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<CatalogExtent>,
    pub count: usize,
    pub events: Vec<EventItem>,
}

/// Output for visible command
#[derive(Debug, Serialize)]
pub struct VisibleOutput {
    pub viewport: Viewport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub count: usize,
    pub events: Vec<EventItem>,
}

/// Output for nearby command
#[derive(Debug, Serialize)]
pub struct NearbyOutput {
    pub reference: ResolvedReference,
    pub radius_km: f64,
    pub ranked: bool,
    pub count: usize,
    pub events: Vec<EventItem>,
}

/// Output for links command
#[derive(Debug, Serialize)]
pub struct LinksOutput {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub links: Vec<String>,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ReferencePoint;
use crate::error::{Result, VolunteerHubError};

/// Unique identifier for a volunteer event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A volunteer event with a WGS-84 position
///
/// `date`, `time` and `location` are display payload only; no query reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, stable for the lifetime of the dataset
    pub id: EventId,

    /// Display name, searched by keyword queries
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Date label (e.g. "Sep 12, 2025")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Time label (e.g. "9:00 AM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Human readable place (e.g. "Union Square")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    /// Create an event without display payload
    pub fn new(id: impl Into<EventId>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            date: None,
            time: None,
            location: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The event position as a reference point for distance queries
    pub fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::new(self.latitude, self.longitude)
    }

    /// Check that the coordinates are finite and inside the WGS-84 ranges
    pub fn check_coordinates(&self) -> Result<()> {
        let invalid = |reason: String| VolunteerHubError::InvalidCoordinate {
            event_id: self.id.to_string(),
            reason,
        };

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid(format!("latitude {} outside [-90, 90]", self.latitude)));
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid(format!("longitude {} outside [-180, 180]", self.longitude)));
        }

        Ok(())
    }
}

/// Validation policy for catalog ingestion and query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidityMode {
    /// Reject invalid coordinates, duplicate ids, negative spans and radii
    Strict,
    /// Pass input through and log anomalies
    #[default]
    Lenient,
}

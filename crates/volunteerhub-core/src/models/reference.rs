use serde::{Deserialize, Serialize};

use super::EventId;

/// The point nearby distances are measured from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Where a resolved reference point came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "event_id", rename_all = "snake_case")]
pub enum ReferenceSource {
    /// Live device location
    Device,
    /// Coordinates of the first event in the catalog
    FallbackEvent(EventId),
}

/// A reference point together with its origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReference {
    pub point: ReferencePoint,
    pub source: ReferenceSource,
}

impl ResolvedReference {
    pub fn device(point: ReferencePoint) -> Self {
        Self { point, source: ReferenceSource::Device }
    }

    pub fn fallback(point: ReferencePoint, event_id: EventId) -> Self {
        Self { point, source: ReferenceSource::FallbackEvent(event_id) }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ReferenceSource::FallbackEvent(_))
    }
}

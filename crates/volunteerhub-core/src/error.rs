//! Error types for VolunteerHub

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VolunteerHubError {
    // Query validation errors
    #[error("Invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("Invalid search radius: {radius_km} km")]
    InvalidRadius { radius_km: f64 },

    // Catalog errors
    #[error("Invalid coordinates for event {event_id}: {reason}")]
    InvalidCoordinate { event_id: String, reason: String },

    #[error("Duplicate event id: {id}")]
    DuplicateEventId { id: String },

    #[error("Event not found: {id}")]
    EventNotFound { id: String },

    #[error("No reference point available: event catalog is empty")]
    NoReferencePoint,

    // Location errors
    #[error("Device location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    #[error("Device location lookup timed out after {timeout_ms} ms")]
    LocationTimeout { timeout_ms: u64 },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Source errors
    #[error("Invalid {format} event source: {reason}")]
    SourceFormat { format: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, VolunteerHubError>;

//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Event, ReferencePoint};

/// Port for loading the event catalog
///
/// Each call returns the full collection; callers replace their catalog
/// wholesale rather than patching individual events.
pub trait EventSource: Send + Sync {
    /// Load every event, in source order
    fn load_events(&self) -> Result<Vec<Event>>;

    /// Short label for logs and status output
    fn describe(&self) -> String;
}

/// Port for the device location capability
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Look up the current device position
    ///
    /// # Errors
    /// `LocationUnavailable` when the capability is missing or denied.
    async fn current_location(&self) -> Result<ReferencePoint>;
}

//! Reference point resolution for nearby searches.
//!
//! The chain runs once per search: ask the device for a fix within the
//! timeout, otherwise fall back to the first event of the full catalog.
//! Failures are never retried.

use async_trait::async_trait;
use std::time::Duration;
use volunteerhub_core::config::DEFAULT_LOCATION_TIMEOUT_MS;
use volunteerhub_core::error::{Result, VolunteerHubError};
use volunteerhub_core::models::{Event, ReferencePoint, ResolvedReference};
use volunteerhub_core::ports::LocationProvider;

/// Resolves the point a nearby search measures from
#[derive(Debug, Clone, Copy)]
pub struct ReferencePointResolver {
    timeout: Duration,
}

impl Default for ReferencePointResolver {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LOCATION_TIMEOUT_MS)
    }
}

impl ReferencePointResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the provider for a fix, bounded by the timeout
    ///
    /// # Errors
    /// `LocationTimeout` when the provider does not answer in time, or the
    /// provider's own error.
    pub async fn locate(&self, provider: &dyn LocationProvider) -> Result<ReferencePoint> {
        match tokio::time::timeout(self.timeout, provider.current_location()).await {
            Ok(result) => result,
            Err(_) => Err(VolunteerHubError::LocationTimeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }

    /// Resolve a reference point, falling back to the first event
    ///
    /// `provider` is `None` when the platform has no location capability.
    /// `events` must be the full, unfiltered catalog.
    ///
    /// # Errors
    /// `NoReferencePoint` when the device fix fails and the catalog is empty.
    pub async fn resolve(
        &self,
        provider: Option<&dyn LocationProvider>,
        events: &[Event],
    ) -> Result<ResolvedReference> {
        match provider {
            Some(provider) => match self.locate(provider).await {
                Ok(point) => {
                    tracing::debug!(
                        "Using device location {:.5}, {:.5}",
                        point.latitude,
                        point.longitude
                    );
                    return Ok(ResolvedReference::device(point));
                }
                Err(e) => tracing::warn!("{}; falling back to first event", e),
            },
            None => tracing::debug!("No location capability; falling back to first event"),
        }

        let first = events.first().ok_or(VolunteerHubError::NoReferencePoint)?;
        Ok(ResolvedReference::fallback(first.reference_point(), first.id.clone()))
    }
}

/// Location provider that always reports the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    point: ReferencePoint,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { point: ReferencePoint::new(latitude, longitude) }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self) -> Result<ReferencePoint> {
        Ok(self.point)
    }
}

/// Location provider for platforms where lookups are denied or failing
#[derive(Debug, Clone)]
pub struct UnavailableLocationProvider {
    reason: String,
}

impl UnavailableLocationProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_location(&self) -> Result<ReferencePoint> {
        Err(VolunteerHubError::LocationUnavailable { reason: self.reason.clone() })
    }
}

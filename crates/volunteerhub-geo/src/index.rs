use geo::algorithm::bounding_rect::BoundingRect;
use geo::{MultiPoint, Rect};
use std::collections::HashSet;
use volunteerhub_core::error::{Result, VolunteerHubError};
use volunteerhub_core::models::{
    Event, EventId, ReferencePoint, ResolvedReference, ValidityMode, Viewport,
};
use volunteerhub_core::ports::EventSource;

use crate::keyword::filter_by_keyword;
use crate::models::PointExt;
use crate::spatial::{filter_by_viewport, find_nearby, rank_by_distance, NearbyEvent};

/// Event catalog answering viewport, keyword and nearby queries
///
/// The catalog is replaced wholesale on [`reload`](Self::reload). Queries
/// recompute from the current catalog every time and never mutate it.
#[derive(Debug, Clone, Default)]
pub struct GeoEventIndex {
    events: Vec<Event>,
    validity: ValidityMode,
}

impl GeoEventIndex {
    /// Create an empty index
    pub fn new(validity: ValidityMode) -> Self {
        Self { events: Vec::new(), validity }
    }

    /// Create an index over an initial catalog
    pub fn from_events(events: Vec<Event>, validity: ValidityMode) -> Result<Self> {
        let mut index = Self::new(validity);
        index.reload(events)?;
        Ok(index)
    }

    /// Create an index from an event source
    pub fn from_source(source: &dyn EventSource, validity: ValidityMode) -> Result<Self> {
        let events = source.load_events()?;
        tracing::debug!("Loaded {} events from {}", events.len(), source.describe());
        Self::from_events(events, validity)
    }

    /// Replace the catalog
    ///
    /// Strict mode rejects the whole batch on the first invalid coordinate or
    /// duplicate id and leaves the current catalog untouched. Lenient mode
    /// keeps out-of-range events and drops later duplicates.
    ///
    /// Returns the number of events now in the catalog.
    pub fn reload(&mut self, events: Vec<Event>) -> Result<usize> {
        let mut seen: HashSet<EventId> = HashSet::with_capacity(events.len());
        let mut accepted = Vec::with_capacity(events.len());

        for event in events {
            if let Err(e) = event.check_coordinates() {
                match self.validity {
                    ValidityMode::Strict => return Err(e),
                    ValidityMode::Lenient => tracing::warn!("Keeping event with {}", e),
                }
            }

            if !seen.insert(event.id.clone()) {
                match self.validity {
                    ValidityMode::Strict => {
                        return Err(VolunteerHubError::DuplicateEventId { id: event.id.to_string() })
                    }
                    ValidityMode::Lenient => {
                        tracing::warn!("Dropping duplicate event id {}", event.id);
                        continue;
                    }
                }
            }

            accepted.push(event);
        }

        self.events = accepted;
        tracing::info!("Event catalog reloaded with {} events", self.events.len());
        Ok(self.events.len())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn validity(&self) -> ValidityMode {
        self.validity
    }

    /// Look up an event by id
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Look up an event by id, failing with `EventNotFound`
    pub fn require(&self, id: &EventId) -> Result<&Event> {
        self.get(id).ok_or_else(|| VolunteerHubError::EventNotFound { id: id.to_string() })
    }

    /// Events inside the viewport
    pub fn visible(&self, viewport: &Viewport) -> Result<Vec<&Event>> {
        self.check_viewport(viewport)?;

        let visible = filter_by_viewport(&self.events, viewport);
        tracing::debug!("{} of {} events inside viewport", visible.len(), self.events.len());
        Ok(visible)
    }

    /// Events whose name contains the query, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let matched = filter_by_keyword(&self.events, query);
        tracing::debug!("{} events match '{}'", matched.len(), query);
        matched
    }

    /// Keyword search narrowed to the viewport
    pub fn visible_matching(&self, query: &str, viewport: &Viewport) -> Result<Vec<&Event>> {
        self.check_viewport(viewport)?;

        let visible = filter_by_viewport(filter_by_keyword(&self.events, query), viewport);
        tracing::debug!("{} events match '{}' inside viewport", visible.len(), query);
        Ok(visible)
    }

    /// Events within `radius_km` of the reference point, in catalog order
    pub fn nearby(&self, reference: &ReferencePoint, radius_km: f64) -> Result<Vec<&Event>> {
        self.check_radius(radius_km)?;

        let nearby = find_nearby(&self.events, reference, radius_km);
        tracing::debug!("{} events within {} km", nearby.len(), radius_km);
        Ok(nearby)
    }

    /// Events within `radius_km` of the reference point, nearest first
    pub fn nearby_ranked(
        &self,
        reference: &ReferencePoint,
        radius_km: f64,
    ) -> Result<Vec<NearbyEvent<'_>>> {
        self.check_radius(radius_km)?;
        Ok(rank_by_distance(&self.events, reference, radius_km))
    }

    /// The first catalog event as a reference point
    pub fn fallback_reference(&self) -> Option<ResolvedReference> {
        self.events
            .first()
            .map(|event| ResolvedReference::fallback(event.reference_point(), event.id.clone()))
    }

    /// A square viewport centered on the first event
    pub fn initial_viewport(&self, span: f64) -> Option<Viewport> {
        self.events.first().map(|event| Viewport::centered_on(event, span))
    }

    /// Bounding rectangle of all event positions (x = longitude, y = latitude)
    pub fn extent(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> =
            self.events.iter().map(|event| event.to_geo_point()).collect();
        points.bounding_rect()
    }

    fn check_viewport(&self, viewport: &Viewport) -> Result<()> {
        match self.validity {
            ValidityMode::Strict => viewport.check(),
            ValidityMode::Lenient => Ok(()),
        }
    }

    fn check_radius(&self, radius_km: f64) -> Result<()> {
        if self.validity == ValidityMode::Strict && !(radius_km.is_finite() && radius_km >= 0.0) {
            return Err(VolunteerHubError::InvalidRadius { radius_km });
        }
        Ok(())
    }
}

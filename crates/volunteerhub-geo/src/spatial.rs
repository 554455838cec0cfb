use serde::Serialize;
use volunteerhub_core::models::{Event, ReferencePoint, Viewport};

use crate::distance::{distance_to_event, DISTANCE_TOLERANCE_KM};

/// Default radius for nearby searches, in kilometers
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

/// Keep the events whose position lies inside the viewport, bounds inclusive
///
/// Input order is preserved. Events with NaN coordinates never match.
pub fn filter_by_viewport<'a, I>(events: I, viewport: &Viewport) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let bounds = viewport.bounds();

    events
        .into_iter()
        .filter(|event| bounds.contains(event.latitude, event.longitude))
        .collect()
}

/// Keep the events within `radius_km` of the reference point
///
/// Output stays in input order; use [`rank_by_distance`] for nearest-first.
pub fn find_nearby<'a, I>(events: I, reference: &ReferencePoint, radius_km: f64) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| within_radius(distance_to_event(reference, event), radius_km))
        .collect()
}

/// An event paired with its distance from a reference point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearbyEvent<'a> {
    pub event: &'a Event,
    pub distance_km: f64,
}

/// Nearby events sorted nearest-first
///
/// Ties keep input order.
pub fn rank_by_distance<'a, I>(
    events: I,
    reference: &ReferencePoint,
    radius_km: f64,
) -> Vec<NearbyEvent<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut ranked: Vec<NearbyEvent<'a>> = events
        .into_iter()
        .map(|event| NearbyEvent { event, distance_km: distance_to_event(reference, event) })
        .filter(|nearby| within_radius(nearby.distance_km, radius_km))
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

#[inline]
fn within_radius(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km + DISTANCE_TOLERANCE_KM
}

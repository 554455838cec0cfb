use volunteerhub_core::models::{Event, ReferencePoint};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack applied to radius comparisons to absorb trig rounding
pub const DISTANCE_TOLERANCE_KM: f64 = 1e-9;

/// Great-circle distance between two points in kilometers (haversine)
#[inline]
pub fn haversine_km(from: &ReferencePoint, to: &ReferencePoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from a reference point to an event in kilometers
#[inline]
pub fn distance_to_event(reference: &ReferencePoint, event: &Event) -> f64 {
    haversine_km(reference, &event.reference_point())
}

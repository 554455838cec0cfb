//! VolunteerHub Geo - Spatial queries over volunteer events
//!
//! Viewport containment, keyword narrowing and haversine proximity search,
//! plus the reference point fallback chain and map deep links.

pub mod distance;
pub mod export;
pub mod index;
pub mod keyword;
pub mod links;
pub mod models;
pub mod reference;
pub mod spatial;

pub use distance::{distance_to_event, haversine_km, EARTH_RADIUS_KM};
pub use index::GeoEventIndex;
pub use keyword::filter_by_keyword;
pub use reference::ReferencePointResolver;
pub use spatial::{filter_by_viewport, find_nearby, rank_by_distance, NearbyEvent};

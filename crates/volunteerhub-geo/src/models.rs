//! Conversions between event models and `geo` types.

use geo::Point;

pub use volunteerhub_core::models::{Event, ReferencePoint, Viewport};

/// Extension trait for positioned models
pub trait PointExt {
    /// Convert to a `geo::Point` (x = longitude, y = latitude)
    fn to_geo_point(&self) -> Point<f64>;
}

impl PointExt for Event {
    fn to_geo_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl PointExt for ReferencePoint {
    fn to_geo_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Build a reference point from a `geo::Point`
pub fn reference_from_geo(point: Point<f64>) -> ReferencePoint {
    ReferencePoint::new(point.y(), point.x())
}

use serde::{Deserialize, Serialize};

use super::Event;
use crate::error::{Result, VolunteerHubError};

/// The rectangular map region currently on screen
///
/// Spans are full widths in degrees; the window extends half a span on each
/// side of the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Viewport {
    pub fn new(
        center_latitude: f64,
        center_longitude: f64,
        latitude_span: f64,
        longitude_span: f64,
    ) -> Self {
        Self { center_latitude, center_longitude, latitude_span, longitude_span }
    }

    /// A square region centered on an event, used as the initial map region
    pub fn centered_on(event: &Event, span: f64) -> Self {
        Self::new(event.latitude, event.longitude, span, span)
    }

    /// Inclusive latitude/longitude bounds of the window
    pub fn bounds(&self) -> ViewportBounds {
        let half_lat = self.latitude_span / 2.0;
        let half_lon = self.longitude_span / 2.0;

        ViewportBounds {
            min_latitude: self.center_latitude - half_lat,
            max_latitude: self.center_latitude + half_lat,
            min_longitude: self.center_longitude - half_lon,
            max_longitude: self.center_longitude + half_lon,
        }
    }

    /// Check if a position falls inside the window, bounds included
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.bounds().contains(latitude, longitude)
    }

    /// Reject non-finite values and negative spans
    pub fn check(&self) -> Result<()> {
        let fields = [
            ("center_latitude", self.center_latitude),
            ("center_longitude", self.center_longitude),
            ("latitude_span", self.latitude_span),
            ("longitude_span", self.longitude_span),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(VolunteerHubError::InvalidViewport {
                    reason: format!("{} is not finite ({})", name, value),
                });
            }
        }

        if self.latitude_span < 0.0 || self.longitude_span < 0.0 {
            return Err(VolunteerHubError::InvalidViewport {
                reason: format!(
                    "spans must be non-negative (latitude_span={}, longitude_span={})",
                    self.latitude_span, self.longitude_span
                ),
            });
        }

        Ok(())
    }
}

/// Min/max corners of a viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl ViewportBounds {
    /// Inclusive containment. Any NaN operand makes this false.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_symmetric() {
        let viewport = Viewport::new(10.0, 20.0, 2.0, 4.0);
        let bounds = viewport.bounds();

        assert_eq!(bounds.min_latitude, 9.0);
        assert_eq!(bounds.max_latitude, 11.0);
        assert_eq!(bounds.min_longitude, 18.0);
        assert_eq!(bounds.max_longitude, 22.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let viewport = Viewport::new(0.0, 0.0, 2.0, 2.0);

        assert!(viewport.contains(1.0, 1.0));
        assert!(viewport.contains(-1.0, -1.0));
        assert!(!viewport.contains(1.0001, 0.0));
        assert!(!viewport.contains(0.0, -1.0001));
    }

    #[test]
    fn test_zero_span_matches_center_only() {
        let viewport = Viewport::new(5.0, 5.0, 0.0, 0.0);

        assert!(viewport.contains(5.0, 5.0));
        assert!(!viewport.contains(5.0, 5.000001));
    }

    #[test]
    fn test_nan_never_contained() {
        let viewport = Viewport::new(0.0, 0.0, 10.0, 10.0);

        assert!(!viewport.contains(f64::NAN, 0.0));
        assert!(!viewport.contains(0.0, f64::NAN));
    }

    #[test]
    fn test_centered_on_event() {
        let event = Event::new("e1", "Community Cleanup", 37.7749, -122.4194);
        let viewport = Viewport::centered_on(&event, 0.05);

        assert_eq!(viewport.center_latitude, 37.7749);
        assert_eq!(viewport.center_longitude, -122.4194);
        assert_eq!(viewport.latitude_span, 0.05);
        assert_eq!(viewport.longitude_span, 0.05);
    }

    #[test]
    fn test_check_rejects_negative_span() {
        assert!(Viewport::new(0.0, 0.0, -1.0, 1.0).check().is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, -0.5).check().is_err());
        assert!(Viewport::new(0.0, 0.0, 0.0, 0.0).check().is_ok());
    }

    #[test]
    fn test_check_rejects_nan() {
        let err = Viewport::new(f64::NAN, 0.0, 1.0, 1.0).check().unwrap_err();
        assert!(err.to_string().contains("center_latitude"));
    }
}

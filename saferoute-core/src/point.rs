//! Geographic points in `(latitude, longitude)` order.

use geo::Point;

/// A WGS84 position expressed in degrees.
///
/// The core always stores latitude first. Collaborators that speak
/// `[longitude, latitude]` (GeoJSON, OSRM) convert at their boundary and never
/// hand raw pairs to the scoring code.
///
/// # Examples
/// ```
/// use saferoute_core::GeoPoint;
///
/// let connaught_place = GeoPoint::new(28.6315, 77.2167);
/// assert_eq!(connaught_place.latitude, 28.6315);
/// assert_eq!(connaught_place.longitude, 77.2167);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Report whether both ordinates are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self::new(point.longitude, point.latitude)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

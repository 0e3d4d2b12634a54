//! Great-circle distances between [`GeoPoint`] values.

use geo::{Destination, Distance, HaversineMeasure, Point};

use crate::GeoPoint;

/// Sphere radius used for every proximity calculation, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_METRES);

/// Haversine distance between two points in metres.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, haversine_distance};
///
/// let a = GeoPoint::new(28.6139, 77.2090);
/// let b = GeoPoint::new(28.6140, 77.2090);
/// let metres = haversine_distance(a, b);
/// assert!((11.0..11.2).contains(&metres));
/// ```
#[must_use]
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    EARTH.distance(Point::from(from), Point::from(to))
}

/// Point reached by travelling `metres` from `origin` along `bearing_degrees`
/// (clockwise from north) on the same sphere as [`haversine_distance`].
#[must_use]
pub fn destination_point(origin: GeoPoint, bearing_degrees: f64, metres: f64) -> GeoPoint {
    EARTH
        .destination(Point::from(origin), bearing_degrees, metres)
        .into()
}

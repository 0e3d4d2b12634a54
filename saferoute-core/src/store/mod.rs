//! In-memory incident store and radius queries.
//!
//! [`IncidentStore`] owns every loaded [`Incident`] and answers
//! [`IncidentStore::within`] queries using great-circle distance. Incidents
//! are indexed in an R\*-tree keyed by `(longitude, latitude)` so a query only
//! measures candidates inside a conservative bounding envelope. Queries whose
//! envelope would wrap a pole or the antimeridian scan every incident instead;
//! the result is the same either way.
//!
//! A store is immutable after construction. Use [`SharedIncidentStore`] to
//! publish a replacement to concurrent readers.

use std::fmt;

use rstar::{AABB, RTree, primitives::GeomWithData};

use crate::{EARTH_RADIUS_METRES, GeoPoint, Incident, haversine_distance};

mod shared;

pub use shared::SharedIncidentStore;

/// Slack added to each side of a query envelope, in degrees.
const ENVELOPE_PADDING_DEGREES: f64 = 1e-9;

type IndexedIncident = GeomWithData<[f64; 2], usize>;

/// Immutable collection of incidents with a spatial index.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, Incident, IncidentStore};
///
/// let store = IncidentStore::new(vec![
///     Incident::new(GeoPoint::new(28.6139, 77.2090), "Theft"),
///     Incident::new(GeoPoint::new(28.7041, 77.1025), "Robbery"),
/// ]);
///
/// let nearby = store.within(GeoPoint::new(28.6140, 77.2090), 500.0);
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].category, "Theft");
/// ```
#[derive(Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    index: RTree<IndexedIncident>,
}

impl fmt::Debug for IncidentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentStore")
            .field("incidents", &self.incidents.len())
            .finish_non_exhaustive()
    }
}

impl IncidentStore {
    /// Build a store from loaded incidents.
    ///
    /// Incidents whose coordinates are not finite cannot be indexed and are
    /// dropped with a warning.
    #[must_use]
    pub fn new(incidents: Vec<Incident>) -> Self {
        let total = incidents.len();
        let indexable: Vec<Incident> = incidents
            .into_iter()
            .filter(|incident| incident.location.is_finite())
            .collect();
        let dropped = total.saturating_sub(indexable.len());
        if dropped > 0 {
            log::warn!("Dropped {dropped} incidents with non-finite coordinates");
        }

        let entries = indexable
            .iter()
            .enumerate()
            .map(|(position, incident)| {
                GeomWithData::new(
                    [incident.location.longitude, incident.location.latitude],
                    position,
                )
            })
            .collect();

        Self {
            incidents: indexable,
            index: RTree::bulk_load(entries),
        }
    }

    /// Construct a store holding no incidents.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every incident in load order.
    #[must_use]
    pub const fn incidents(&self) -> &[Incident] {
        self.incidents.as_slice()
    }

    /// Number of stored incidents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Report whether the store holds no incidents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Return every incident whose great-circle distance from `center` is at
    /// most `radius_metres`.
    ///
    /// The boundary is inclusive. Results follow load order. A negative or
    /// NaN radius, or a non-finite centre, matches nothing.
    #[must_use]
    pub fn within(&self, center: GeoPoint, radius_metres: f64) -> Vec<&Incident> {
        if !center.is_finite() || radius_metres.is_nan() || radius_metres < 0.0 {
            return Vec::new();
        }

        let mut positions: Vec<usize> = match query_envelope(center, radius_metres) {
            Some(envelope) => self
                .index
                .locate_in_envelope_intersecting(&envelope)
                .map(|entry| entry.data)
                .filter(|&position| self.is_within(position, center, radius_metres))
                .collect(),
            None => (0..self.incidents.len())
                .filter(|&position| self.is_within(position, center, radius_metres))
                .collect(),
        };
        positions.sort_unstable();

        positions
            .into_iter()
            .filter_map(|position| self.incidents.get(position))
            .collect()
    }

    fn is_within(&self, position: usize, center: GeoPoint, radius_metres: f64) -> bool {
        self.incidents
            .get(position)
            .is_some_and(|incident| haversine_distance(center, incident.location) <= radius_metres)
    }
}

impl From<Vec<Incident>> for IncidentStore {
    fn from(incidents: Vec<Incident>) -> Self {
        Self::new(incidents)
    }
}

impl FromIterator<Incident> for IncidentStore {
    fn from_iter<I: IntoIterator<Item = Incident>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Lon/lat envelope containing every point within `radius_metres` of
/// `center`, or `None` when the circle touches a pole or the antimeridian.
#[expect(
    clippy::float_arithmetic,
    reason = "envelope bounds are derived from spherical trigonometry"
)]
fn query_envelope(center: GeoPoint, radius_metres: f64) -> Option<AABB<[f64; 2]>> {
    let angular = radius_metres / EARTH_RADIUS_METRES;
    if !angular.is_finite() || angular >= std::f64::consts::FRAC_PI_2 {
        return None;
    }

    let lat_delta = angular.to_degrees() + ENVELOPE_PADDING_DEGREES;
    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;
    if min_lat <= -90.0 || max_lat >= 90.0 {
        return None;
    }

    let spread = angular.sin() / center.latitude.to_radians().cos();
    if !spread.is_finite() || spread >= 1.0 {
        return None;
    }
    let lon_delta = spread.asin().to_degrees() + ENVELOPE_PADDING_DEGREES;
    let min_lon = center.longitude - lon_delta;
    let max_lon = center.longitude + lon_delta;
    if min_lon < -180.0 || max_lon > 180.0 {
        return None;
    }

    Some(AABB::from_corners([min_lon, min_lat], [max_lon, max_lat]))
}

#[cfg(test)]
mod tests;

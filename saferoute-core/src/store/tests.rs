//! Unit tests for radius queries over the incident store.

use rstest::{fixture, rstest};

use super::*;
use crate::destination_point;

const DELHI: GeoPoint = GeoPoint::new(28.6139, 77.2090);

fn at(center: GeoPoint, bearing: f64, metres: f64, category: &str) -> Incident {
    Incident::new(destination_point(center, bearing, metres), category)
}

fn categories<'a>(found: &[&'a Incident]) -> Vec<&'a str> {
    found.iter().map(|incident| incident.category.as_str()).collect()
}

#[fixture]
fn ring() -> IncidentStore {
    IncidentStore::new(vec![
        at(DELHI, 0.0, 100.0, "near"),
        at(DELHI, 90.0, 499.0, "edge"),
        at(DELHI, 180.0, 500.1, "outside"),
        at(DELHI, 270.0, 2_000.0, "far"),
    ])
}

#[rstest]
fn within_returns_only_incidents_inside_radius(ring: IncidentStore) {
    let found = ring.within(DELHI, 500.0);
    assert_eq!(categories(&found), ["near", "edge"]);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
fn boundary_distance_is_inclusive() {
    let incident = at(DELHI, 45.0, 500.0, "boundary");
    // Projecting 500 m lands a few nanometres off, so query at the measured
    // distance to hit the boundary exactly.
    let exact = haversine_distance(DELHI, incident.location);
    let store = IncidentStore::new(vec![incident]);

    assert_eq!(store.within(DELHI, exact).len(), 1);
    assert!(store.within(DELHI, exact - 0.1).is_empty());
}

#[rstest]
fn results_follow_load_order() {
    let store = IncidentStore::new(vec![
        at(DELHI, 10.0, 300.0, "first"),
        at(DELHI, 200.0, 50.0, "second"),
        at(DELHI, 100.0, 450.0, "third"),
    ]);
    assert_eq!(categories(&store.within(DELHI, 500.0)), ["first", "second", "third"]);
}

#[rstest]
fn empty_store_matches_nothing() {
    assert!(IncidentStore::empty().within(DELHI, 10_000.0).is_empty());
}

#[rstest]
#[case(f64::NAN)]
#[case(-1.0)]
fn invalid_radius_matches_nothing(ring: IncidentStore, #[case] radius: f64) {
    assert!(ring.within(DELHI, radius).is_empty());
}

#[rstest]
fn non_finite_centre_matches_nothing(ring: IncidentStore) {
    assert!(ring.within(GeoPoint::new(f64::NAN, 77.0), 500.0).is_empty());
}

#[rstest]
fn non_finite_incidents_are_dropped() {
    let store = IncidentStore::new(vec![
        Incident::new(GeoPoint::new(f64::NAN, 0.0), "bad"),
        Incident::new(DELHI, "good"),
    ]);
    assert_eq!(store.len(), 1);
    assert_eq!(categories(&store.within(DELHI, 1.0)), ["good"]);
}

#[rstest]
fn zero_radius_matches_colocated_incident() {
    let store = IncidentStore::new(vec![Incident::new(DELHI, "here")]);
    assert_eq!(store.within(DELHI, 0.0).len(), 1);
}

#[rstest]
#[case(GeoPoint::new(0.0, 179.9999))]
#[case(GeoPoint::new(0.0, -179.9999))]
#[case(GeoPoint::new(89.9999, 10.0))]
#[case(GeoPoint::new(-89.9999, -120.0))]
fn queries_near_the_antimeridian_and_poles_match_a_linear_scan(#[case] center: GeoPoint) {
    let incidents: Vec<Incident> = [0.0, 60.0, 90.0, 135.0, 180.0, 270.0, 315.0]
        .iter()
        .flat_map(|&bearing| {
            [200.0, 499.0, 501.0, 900.0]
                .into_iter()
                .map(move |metres| at(center, bearing, metres, "probe"))
        })
        .collect();
    let expected = incidents
        .iter()
        .filter(|incident| haversine_distance(center, incident.location) <= 500.0)
        .count();
    let store = IncidentStore::new(incidents);

    assert_eq!(store.within(center, 500.0).len(), expected);
    assert_eq!(expected, 14);
}

#[rstest]
fn huge_radius_matches_everything(ring: IncidentStore) {
    assert_eq!(ring.within(DELHI, 30_000_000.0).len(), ring.len());
}

#[rstest]
fn envelope_is_skipped_when_circle_reaches_a_pole() {
    assert!(query_envelope(GeoPoint::new(89.999, 0.0), 500.0).is_none());
    assert!(query_envelope(DELHI, 500.0).is_some());
}

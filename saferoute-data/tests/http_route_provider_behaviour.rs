#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for [`HttpRouteProvider`] against a canned OSRM server.

use std::cell::RefCell;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use saferoute_core::{
    GeoPoint, Incident, IncidentStore, PathGeometry, RankedRoutes, RouteProvider,
    RouteProviderError, RouteRecommender, SafetyScorer, SharedIncidentStore,
};
use saferoute_data::routing::test_support::{
    CannedOsrmServer, CannedRoute, error_response_json, route_response_json,
};
use saferoute_data::{HttpRouteProvider, HttpRouteProviderConfig};

const START: GeoPoint = GeoPoint::new(28.6139, 77.209);
const END: GeoPoint = GeoPoint::new(28.65, 77.23);

type RouteOutcome = Result<Vec<PathGeometry>, RouteProviderError>;

/// World state for OSRM provider scenarios.
#[derive(Default)]
struct RoutingWorld {
    server: RefCell<Option<CannedOsrmServer>>,
    base_url: RefCell<String>,
    incidents: RefCell<Vec<Incident>>,
    outcome: RefCell<Option<RouteOutcome>>,
    ranked: RefCell<Option<RankedRoutes>>,
    request_target: RefCell<String>,
}

#[fixture]
fn world() -> RoutingWorld {
    RoutingWorld::default()
}

fn two_routes() -> Vec<CannedRoute> {
    vec![
        (vec![[77.209, 28.6139], [77.22, 28.63], [77.23, 28.65]], 5_000.0, 600.0),
        (vec![[77.19, 28.62], [77.21, 28.66], [77.23, 28.65]], 6_200.0, 700.0),
    ]
}

impl RoutingWorld {
    fn serve(&self, server: CannedOsrmServer) {
        self.base_url.replace(server.base_url().to_owned());
        self.server.replace(Some(server));
    }

    fn provider(&self) -> HttpRouteProvider {
        let config = HttpRouteProviderConfig::new(self.base_url.borrow().as_str())
            .with_timeout(Duration::from_millis(300))
            .without_system_proxy();
        HttpRouteProvider::with_config(config).expect("provider should build")
    }

    fn finish_exchange(&self) {
        if let Some(server) = self.server.take() {
            let target = server.request_target().expect("server handled the request");
            self.request_target.replace(target);
        }
    }

    fn error(&self) -> RouteProviderError {
        self.outcome
            .borrow()
            .clone()
            .expect("routes requested")
            .expect_err("request should fail")
    }
}

#[given("an OSRM service returning two routes")]
fn given_two_routes(world: &RoutingWorld) {
    let body = route_response_json(&two_routes());
    world.serve(CannedOsrmServer::respond(200, body).expect("bind canned server"));
}

#[given("an OSRM service reporting no route")]
fn given_no_route(world: &RoutingWorld) {
    let body = error_response_json("NoRoute", "Impossible route between points");
    world.serve(CannedOsrmServer::respond(200, body).expect("bind canned server"));
}

#[given("an OSRM service answering with HTTP status {status:u16}")]
fn given_http_status(world: &RoutingWorld, status: u16) {
    let body = error_response_json("Overloaded", "try again later");
    world.serve(CannedOsrmServer::respond(status, body).expect("bind canned server"));
}

#[given("an OSRM service answering with malformed JSON")]
fn given_malformed(world: &RoutingWorld) {
    world.serve(CannedOsrmServer::respond(200, "{\"code\": \"Ok\", \"routes\": [").expect("bind canned server"));
}

#[given("an OSRM service that never answers")]
fn given_stalled(world: &RoutingWorld) {
    world.serve(CannedOsrmServer::stall(Duration::from_secs(2)).expect("bind canned server"));
}

#[given("an unreachable OSRM service")]
fn given_unreachable(world: &RoutingWorld) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let address = listener.local_addr().expect("probe address");
    drop(listener);
    world.base_url.replace(format!("http://{address}"));
}

#[given("{count:usize} robberies reported at the start of the first route")]
fn given_robberies(world: &RoutingWorld, count: usize) {
    world
        .incidents
        .replace(vec![Incident::new(START, "Robbery"); count]);
}

#[when("I request candidate routes")]
fn when_request(world: &RoutingWorld) {
    let outcome = world.provider().candidate_routes(START, END);
    world.outcome.replace(Some(outcome));
    world.finish_exchange();
}

#[when("I ask for a route recommendation")]
fn when_recommend(world: &RoutingWorld) {
    let store = IncidentStore::new(world.incidents.take());
    let recommender = RouteRecommender::new(
        Arc::new(SharedIncidentStore::new(store)),
        world.provider(),
        SafetyScorer::default(),
    );
    let ranked = recommender.recommend(START, END).expect("routes recommended");
    world.ranked.replace(Some(ranked));
    world.finish_exchange();
}

#[then("{count:usize} candidate routes are returned")]
fn then_count(world: &RoutingWorld, count: usize) {
    let borrowed = world.outcome.borrow();
    let routes = borrowed
        .as_ref()
        .expect("routes requested")
        .as_ref()
        .expect("request should succeed");
    assert_eq!(routes.len(), count);
}

#[then("the first route starts at the requested start point")]
fn then_first_start(world: &RoutingWorld) {
    let borrowed = world.outcome.borrow();
    let routes = borrowed
        .as_ref()
        .expect("routes requested")
        .as_ref()
        .expect("request should succeed");
    let first = routes.first().expect("at least one route");
    assert_eq!(first.first(), Some(START));
    assert_eq!(first.distance_metres, 5_000.0);
}

#[then("the request asked for alternatives with longitude first")]
fn then_request_target(world: &RoutingWorld) {
    assert_eq!(
        *world.request_target.borrow(),
        "/route/v1/driving/77.209,28.6139;77.23,28.65\
         ?alternatives=true&steps=false&geometries=geojson&overview=full"
    );
}

#[then("the request fails because no route exists")]
fn then_no_route(world: &RoutingWorld) {
    assert_eq!(world.error(), RouteProviderError::NoRoute);
}

#[then("the request fails with HTTP status {status:u16}")]
fn then_http_status(world: &RoutingWorld, status: u16) {
    let err = world.error();
    assert!(
        matches!(err, RouteProviderError::HttpError { status: actual, .. } if actual == status),
        "expected HTTP {status}, got {err:?}"
    );
}

#[then("the request fails with a parse error")]
fn then_parse_error(world: &RoutingWorld) {
    let err = world.error();
    assert!(matches!(err, RouteProviderError::ParseError { .. }), "got {err:?}");
}

#[then("the request times out")]
fn then_timeout(world: &RoutingWorld) {
    let err = world.error();
    assert!(matches!(err, RouteProviderError::Timeout { .. }), "got {err:?}");
}

#[then("the request fails with a network error")]
fn then_network_error(world: &RoutingWorld) {
    let err = world.error();
    assert!(matches!(err, RouteProviderError::NetworkError { .. }), "got {err:?}");
}

#[then("the second route is recommended")]
fn then_second_recommended(world: &RoutingWorld) {
    let borrowed = world.ranked.borrow();
    let ranked = borrowed.as_ref().expect("recommendation made");
    let best = ranked.best().expect("a route was ranked");
    assert_eq!(best.distance_metres, 6_200.0);
    assert_eq!(best.safety_score, 100.0);
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 0)]
fn alternatives_in_order(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 1)]
fn no_route(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 2)]
fn http_error(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 3)]
fn malformed_body(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 4)]
fn timeout(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 5)]
fn unreachable(world: RoutingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/http_route_provider.feature", index = 6)]
fn recommendation(world: RoutingWorld) {
    let _ = world;
}

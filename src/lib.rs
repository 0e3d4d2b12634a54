//! Facade crate for the SafeRoute safety-aware routing engine.
//!
//! This crate re-exports the core scoring types and exposes the CSV incident
//! loader and OSRM route provider behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use saferoute_core::{
    AnalysisNote, DEFAULT_RADIUS_METRES, GeoPoint, Incident, IncidentStore, PathGeometry,
    PointScore, RankedRoutes, RejectedRoute, RouteError, RouteProvider, RouteProviderError,
    RouteRecommender, RouteScore, SafetyScorer, ScoringConfig, SeverityTable,
    SharedIncidentStore,
};

#[cfg(feature = "http")]
pub use saferoute_data::{
    HttpRouteProvider, HttpRouteProviderConfig, IncidentLoadError, LoadSummary, LoadedIncidents,
    load_incidents, load_incidents_or_empty, reload_incidents,
};

//! Data access for the SafeRoute engine.
//!
//! Responsibilities:
//! - Load incident datasets from CSV into a [`saferoute_core::IncidentStore`].
//! - Adapt the OSRM Route API to [`saferoute_core::RouteProvider`].
//!
//! Boundaries:
//! - Do not encode scoring rules (they live in `saferoute-core`).
//! - Convert service coordinate orders before geometries leave this crate.
//!
//! Invariants:
//! - No global mutable state.
//! - Rows that cannot be placed on the map are skipped and counted, never
//!   fatal.

#![forbid(unsafe_code)]

pub mod incidents;
pub mod routing;

pub use incidents::{
    CATEGORY_COLUMN, IncidentLoadError, LATITUDE_COLUMN, LONGITUDE_COLUMN, LoadSummary,
    LoadedIncidents, SEVERITY_COLUMN, load_incidents, load_incidents_from_reader,
    load_incidents_or_empty, reload_incidents,
};
pub use routing::{
    DEFAULT_OSRM_BASE_URL, DEFAULT_PROFILE, DEFAULT_USER_AGENT, HttpRouteProvider,
    HttpRouteProviderConfig, ProviderBuildError, geo_point_from_lon_lat,
};

//! HTTP route providers for routing services.
//!
//! This module provides [`HttpRouteProvider`], an implementation of
//! [`saferoute_core::RouteProvider`] that fetches a route and its
//! alternatives from an OSRM service.
//!
//! # Example
//!
//! ```no_run
//! use saferoute_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
//! use saferoute_core::{GeoPoint, RouteProvider};
//! use std::time::Duration;
//!
//! let config = HttpRouteProviderConfig::new("http://localhost:5000")
//!     .with_profile("foot")
//!     .with_timeout(Duration::from_secs(10));
//! let provider = HttpRouteProvider::with_config(config)?;
//!
//! let routes = provider.candidate_routes(
//!     GeoPoint::new(28.6139, 77.2090),
//!     GeoPoint::new(28.6500, 77.2300),
//! )?;
//! println!("{} candidate routes", routes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_OSRM_BASE_URL, DEFAULT_PROFILE, DEFAULT_USER_AGENT, HttpRouteProvider,
    HttpRouteProviderConfig, ProviderBuildError, geo_point_from_lon_lat,
};

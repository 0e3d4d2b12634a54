//! HTTP-based `RouteProvider` using OSRM's Route API.
//!
//! This module provides [`HttpRouteProvider`], an implementation of the
//! [`RouteProvider`] trait that asks an OSRM service for a route and its
//! alternatives between two points.
//!
//! # Architecture
//!
//! The [`RouteProvider`] trait is synchronous so the core engine stays
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use saferoute_data::routing::HttpRouteProvider;
//! use saferoute_core::{GeoPoint, RouteProvider};
//!
//! let provider = HttpRouteProvider::new("http://localhost:5000")?;
//! let routes = provider.candidate_routes(
//!     GeoPoint::new(28.6139, 77.2090),
//!     GeoPoint::new(28.7041, 77.1025),
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use reqwest::Client;
use saferoute_core::{GeoPoint, PathGeometry, RouteProvider, RouteProviderError};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::osrm::{OsrmRoute, RouteResponse};

/// Error type for [`HttpRouteProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public OSRM demo server.
pub const DEFAULT_OSRM_BASE_URL: &str = "http://router.project-osrm.org";

/// Default OSRM routing profile.
pub const DEFAULT_PROFILE: &str = "driving";

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "saferoute/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed query: alternatives as GeoJSON full-overview geometries, no steps.
const ROUTE_QUERY: &str = "alternatives=true&steps=false&geometries=geojson&overview=full";

/// Configuration for [`HttpRouteProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRouteProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// OSRM profile segment such as `"driving"` or `"foot"`.
    pub profile: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Honour `HTTP_PROXY` and related environment variables.
    pub use_system_proxy: bool,
}

impl Default for HttpRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_BASE_URL.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            use_system_proxy: true,
        }
    }
}

impl HttpRouteProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Connect directly, ignoring proxy environment variables.
    #[must_use]
    pub const fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

/// Convert an OSRM `[longitude, latitude]` position into a [`GeoPoint`].
///
/// This is the only place the service's axis order is swapped.
///
/// # Examples
/// ```
/// use saferoute_core::GeoPoint;
/// use saferoute_data::geo_point_from_lon_lat;
///
/// assert_eq!(geo_point_from_lon_lat([77.2090, 28.6139]), GeoPoint::new(28.6139, 77.2090));
/// ```
#[must_use]
pub const fn geo_point_from_lon_lat([longitude, latitude]: [f64; 2]) -> GeoPoint {
    GeoPoint::new(latitude, longitude)
}

/// HTTP-based route provider using the OSRM Route API.
///
/// The provider owns a Tokio runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own runtime. Inside
/// a multi-threaded runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]) it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime it falls back to its own runtime, which blocks the
/// caller's runtime for the duration of the request.
pub struct HttpRouteProvider {
    client: Client,
    config: HttpRouteProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpRouteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRouteProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpRouteProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpRouteProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration the provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpRouteProviderConfig {
        &self.config
    }

    /// Build the OSRM Route API URL between two points.
    ///
    /// Coordinates are written `lon,lat` as OSRM expects.
    fn build_route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?{ROUTE_QUERY}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.longitude,
            start.latitude,
            end.longitude,
            end.latitude,
        )
    }

    /// Fetch candidate routes asynchronously.
    async fn fetch_routes_async(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<PathGeometry>, RouteProviderError> {
        let url = self.build_route_url(start, end);
        log::debug!("Requesting candidate routes from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response
                .json()
                .await
                .map_err(|err| RouteProviderError::ParseError {
                    message: err.to_string(),
                })?;

        convert_response(route_response)
    }

    /// Convert a reqwest error to a `RouteProviderError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RouteProviderError {
        if error.is_timeout() {
            return RouteProviderError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RouteProviderError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RouteProviderError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Convert an OSRM response into candidate geometries.
fn convert_response(response: RouteResponse) -> Result<Vec<PathGeometry>, RouteProviderError> {
    if response.is_no_route() {
        return Err(RouteProviderError::NoRoute);
    }
    if !response.is_ok() {
        return Err(RouteProviderError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let routes = response
        .routes
        .ok_or_else(|| RouteProviderError::ParseError {
            message: "OSRM response missing routes array".to_owned(),
        })?;
    if routes.is_empty() {
        return Err(RouteProviderError::NoRoute);
    }
    Ok(routes.into_iter().map(path_from_route).collect())
}

fn path_from_route(route: OsrmRoute) -> PathGeometry {
    let points = route
        .geometry
        .coordinates
        .into_iter()
        .map(geo_point_from_lon_lat)
        .collect();
    PathGeometry::new(points, route.distance, route.duration)
}

impl RouteProvider for HttpRouteProvider {
    /// Fetch the primary route and its alternatives.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime should
    /// be multi-threaded (`flavor = "multi_thread"`); see the type-level
    /// documentation for the `current_thread` fallback.
    fn candidate_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<PathGeometry>, RouteProviderError> {
        let future = self.fetch_routes_async(start, end);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

//! Deterministic collaborators for unit and behaviour tests.

use crate::{GeoPoint, LightingBonus, PathGeometry, RouteProvider, RouteProviderError};

/// `RouteProvider` returning a pre-configured response for any endpoints.
///
/// # Examples
/// ```
/// use saferoute_core::test_support::FixedRouteProvider;
/// use saferoute_core::{GeoPoint, PathGeometry, RouteProvider};
///
/// let path = PathGeometry::new(vec![GeoPoint::new(1.0, 1.0)], 10.0, 2.0);
/// let provider = FixedRouteProvider::new(vec![path]);
/// let routes = provider.candidate_routes(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
/// assert_eq!(routes.map(|r| r.len()), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct FixedRouteProvider {
    response: Result<Vec<PathGeometry>, RouteProviderError>,
}

impl FixedRouteProvider {
    /// Return `routes` from every call, or `NoRoute` when `routes` is empty.
    #[must_use]
    pub fn new(routes: Vec<PathGeometry>) -> Self {
        let response = if routes.is_empty() {
            Err(RouteProviderError::NoRoute)
        } else {
            Ok(routes)
        };
        Self { response }
    }

    /// Fail every call with `error`.
    #[must_use]
    pub const fn failing(error: RouteProviderError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl RouteProvider for FixedRouteProvider {
    fn candidate_routes(
        &self,
        _start: GeoPoint,
        _end: GeoPoint,
    ) -> Result<Vec<PathGeometry>, RouteProviderError> {
        self.response.clone()
    }
}

/// `LightingBonus` returning the same raw value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantLighting(pub f64);

impl LightingBonus for ConstantLighting {
    fn bonus(&self, _point: GeoPoint) -> f64 {
        self.0
    }
}

//! Fetch candidate routes from a routing service.
//!
//! The [`RouteProvider`] trait abstracts the path-finding collaborator. The
//! engine never computes geometries itself; it scores whatever the provider
//! returns. Implementations convert the service's coordinate order into
//! [`GeoPoint`] before returning.

mod error;

pub use error::RouteProviderError;

use crate::{GeoPoint, PathGeometry};

/// Source of candidate route geometries between two points.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::{GeoPoint, PathGeometry, RouteProvider, RouteProviderError};
///
/// struct Straight;
///
/// impl RouteProvider for Straight {
///     fn candidate_routes(
///         &self,
///         start: GeoPoint,
///         end: GeoPoint,
///     ) -> Result<Vec<PathGeometry>, RouteProviderError> {
///         Ok(vec![PathGeometry::new(vec![start, end], 0.0, 0.0)])
///     }
/// }
///
/// let routes = Straight.candidate_routes(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0))?;
/// assert_eq!(routes.len(), 1);
/// # Ok::<(), RouteProviderError>(())
/// ```
pub trait RouteProvider {
    /// Return one or more candidate geometries from `start` to `end`.
    ///
    /// Implementations must return `Err(RouteProviderError::NoRoute)` rather
    /// than an empty list when the service finds nothing.
    fn candidate_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<PathGeometry>, RouteProviderError>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn candidate_routes(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Vec<PathGeometry>, RouteProviderError> {
        (**self).candidate_routes(start, end)
    }
}

//! Order scored routes safest-first.

use crate::{IncidentStore, LightingBonus, PathGeometry, RouteError, RouteScore, SafetyScorer};

/// Sort routes by descending [`RouteScore::safety_score`].
///
/// The sort is stable: routes with equal scores keep their input order, so
/// ranking an already ranked list changes nothing.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, IncidentStore, PathGeometry, SafetyScorer, rank_routes};
///
/// let scorer: SafetyScorer = SafetyScorer::default();
/// let store = IncidentStore::empty();
/// let path = PathGeometry::new(vec![GeoPoint::new(0.0, 0.0)], 0.0, 0.0);
/// let mut risky = scorer.score_route(&store, &path)?;
/// risky.safety_score = 40.0;
/// let mut safe = risky.clone();
/// safe.safety_score = 90.0;
///
/// let ranked = rank_routes(vec![risky, safe]);
/// assert_eq!(ranked[0].safety_score, 90.0);
/// # Ok::<(), saferoute_core::RouteError>(())
/// ```
#[must_use]
pub fn rank_routes(mut routes: Vec<RouteScore>) -> Vec<RouteScore> {
    routes.sort_by(|left, right| right.safety_score.total_cmp(&left.safety_score));
    routes
}

/// A candidate geometry that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRoute {
    /// Position of the geometry in the scored batch.
    pub index: usize,
    /// Why the geometry was rejected.
    pub error: RouteError,
}

/// Outcome of scoring a batch of candidate geometries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedRoutes {
    /// Scored routes, safest first.
    pub routes: Vec<RouteScore>,
    /// Geometries excluded from ranking.
    pub rejected: Vec<RejectedRoute>,
}

impl RankedRoutes {
    /// The safest route, if any could be scored.
    #[must_use]
    pub fn best(&self) -> Option<&RouteScore> {
        self.routes.first()
    }
}

impl<B: LightingBonus> SafetyScorer<B> {
    /// Score every geometry and rank the scoreable ones.
    ///
    /// A geometry that cannot be scored is logged and listed in
    /// [`RankedRoutes::rejected`]; the remaining routes are still ranked.
    ///
    /// # Examples
    /// ```
    /// use saferoute_core::{GeoPoint, IncidentStore, PathGeometry, SafetyScorer};
    ///
    /// let scorer: SafetyScorer = SafetyScorer::default();
    /// let paths = [
    ///     PathGeometry::new(Vec::new(), 0.0, 0.0),
    ///     PathGeometry::new(vec![GeoPoint::new(0.0, 0.0)], 10.0, 2.0),
    /// ];
    /// let ranked = scorer.score_routes(&IncidentStore::empty(), &paths);
    ///
    /// assert_eq!(ranked.routes.len(), 1);
    /// assert_eq!(ranked.rejected[0].index, 0);
    /// ```
    #[must_use]
    pub fn score_routes(&self, store: &IncidentStore, paths: &[PathGeometry]) -> RankedRoutes {
        let mut routes = Vec::with_capacity(paths.len());
        let mut rejected = Vec::new();
        for (index, path) in paths.iter().enumerate() {
            match self.score_route(store, path) {
                Ok(route) => routes.push(route),
                Err(error) => {
                    log::warn!("Excluding candidate route {index} from ranking: {error}");
                    rejected.push(RejectedRoute { index, error });
                }
            }
        }
        RankedRoutes {
            routes: rank_routes(routes),
            rejected,
        }
    }
}

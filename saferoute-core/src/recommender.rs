//! Recommend the safest of several candidate routes.

use std::sync::Arc;

use crate::{
    GeoPoint, LightingBonus, NoLighting, RankedRoutes, RouteProvider, RouteProviderError,
    SafetyScorer, SharedIncidentStore,
};

/// Fetches candidate routes and ranks them by safety.
///
/// Each call scores against the store snapshot current at the time of the
/// call, so a concurrent reload never mixes two datasets within one ranking.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use saferoute_core::{
///     GeoPoint, Incident, IncidentStore, PathGeometry, RouteProvider, RouteProviderError,
///     RouteRecommender, SafetyScorer, SharedIncidentStore,
/// };
///
/// struct TwoRoutes;
///
/// impl RouteProvider for TwoRoutes {
///     fn candidate_routes(
///         &self,
///         start: GeoPoint,
///         end: GeoPoint,
///     ) -> Result<Vec<PathGeometry>, RouteProviderError> {
///         Ok(vec![
///             PathGeometry::new(vec![start, end], 1_000.0, 60.0),
///             PathGeometry::new(vec![end], 1_500.0, 90.0),
///         ])
///     }
/// }
///
/// let start = GeoPoint::new(28.6139, 77.2090);
/// let store = IncidentStore::new(vec![Incident::new(start, "Robbery")]);
/// let recommender = RouteRecommender::new(
///     Arc::new(SharedIncidentStore::new(store)),
///     TwoRoutes,
///     SafetyScorer::default(),
/// );
///
/// let ranked = recommender.recommend(start, GeoPoint::new(28.7041, 77.1025))?;
/// assert_eq!(ranked.best().map(|route| route.distance_metres), Some(1_500.0));
/// # Ok::<(), RouteProviderError>(())
/// ```
#[derive(Debug)]
pub struct RouteRecommender<P, B = NoLighting> {
    store: Arc<SharedIncidentStore>,
    provider: P,
    scorer: SafetyScorer<B>,
}

impl<P: RouteProvider, B: LightingBonus> RouteRecommender<P, B> {
    /// Compose a recommender from its collaborators.
    pub const fn new(store: Arc<SharedIncidentStore>, provider: P, scorer: SafetyScorer<B>) -> Self {
        Self {
            store,
            provider,
            scorer,
        }
    }

    /// Handle used to publish replacement incident stores.
    #[must_use]
    pub const fn store(&self) -> &Arc<SharedIncidentStore> {
        &self.store
    }

    /// Rank the candidate routes between `start` and `end`, safest first.
    ///
    /// # Errors
    /// Returns the provider's error when no candidates could be fetched.
    /// Candidates that cannot be scored are reported in
    /// [`RankedRoutes::rejected`] instead of failing the call.
    pub fn recommend(&self, start: GeoPoint, end: GeoPoint) -> Result<RankedRoutes, RouteProviderError> {
        let candidates = self.provider.candidate_routes(start, end)?;
        let snapshot = self.store.snapshot();
        let ranked = self.scorer.score_routes(&snapshot, &candidates);
        log::info!(
            "Ranked {} of {} candidate routes against {} incidents",
            ranked.routes.len(),
            candidates.len(),
            snapshot.len()
        );
        Ok(ranked)
    }
}

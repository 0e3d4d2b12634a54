//! Point and route safety scoring.
//!
//! A point starts at [`ScoringConfig::base_score`], loses the severity of
//! every incident within [`ScoringConfig::radius_metres`], gains any lighting
//! bonus, and is clamped to `0.0..=100.0`. A route's score is the unweighted
//! mean of its sampled point scores, so a risky middle section counts no more
//! than safe endpoints. Incident counts are summed across samples and
//! overlapping search circles count the same incident more than once.

use crate::{
    AnalysisNote, GeoPoint, IncidentStore, LightingBonus, MAX_SCORE, NoLighting, PathGeometry,
    RouteError, RouteScore, ScoringConfig, sample_points,
};

/// Score and supporting detail for one point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointScore {
    /// Safety score within `0.0..=100.0`; higher is safer.
    pub score: f64,
    /// Incidents found within the search radius.
    pub nearby_incident_count: usize,
    /// Sum of the severities of those incidents.
    pub category_penalty_total: f64,
    /// Sanitised lighting bonus that was applied.
    pub lighting_bonus: f64,
    /// Categories present within the radius in first-seen order.
    pub distinct_categories: Vec<String>,
}

/// Score `point` against `store` with default settings and the given radius.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, Incident, IncidentStore, score_point};
///
/// let store = IncidentStore::new(vec![Incident::new(GeoPoint::new(28.6139, 77.2090), "Theft")]);
/// let result = score_point(&store, GeoPoint::new(28.6140, 77.2090), 500.0);
///
/// assert_eq!(result.score, 97.0);
/// assert_eq!(result.nearby_incident_count, 1);
/// assert_eq!(result.category_penalty_total, 3.0);
/// ```
#[must_use]
pub fn score_point(store: &IncidentStore, point: GeoPoint, radius_metres: f64) -> PointScore {
    SafetyScorer::new(ScoringConfig::default().with_radius_metres(radius_metres))
        .score_point(store, point)
}

/// Scores points and routes against an [`IncidentStore`].
///
/// The scorer holds configuration only; the store is passed to each call so a
/// caller can score against whichever snapshot is current.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, IncidentStore, PathGeometry, SafetyScorer};
///
/// let scorer: SafetyScorer = SafetyScorer::default();
/// let path = PathGeometry::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)], 1_100.0, 90.0);
/// let route = scorer.score_route(&IncidentStore::empty(), &path)?;
///
/// assert_eq!(route.safety_score, 100.0);
/// assert_eq!(route.description, "Safety Score: 100.0/100.");
/// # Ok::<(), saferoute_core::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SafetyScorer<B = NoLighting> {
    config: ScoringConfig,
    lighting: B,
}

impl SafetyScorer {
    /// Create a scorer without a lighting signal.
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            lighting: NoLighting,
        }
    }
}

impl Default for SafetyScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<B: LightingBonus> SafetyScorer<B> {
    /// Replace the lighting bonus source.
    #[must_use]
    pub fn with_lighting<C: LightingBonus>(self, lighting: C) -> SafetyScorer<C> {
        SafetyScorer {
            config: self.config,
            lighting,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single point.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "score is base minus summed penalties plus bonus"
    )]
    pub fn score_point(&self, store: &IncidentStore, point: GeoPoint) -> PointScore {
        let nearby = store.within(point, self.config.radius_metres);

        let mut distinct_categories: Vec<String> = Vec::new();
        let mut category_penalty_total = 0.0;
        for incident in &nearby {
            category_penalty_total += incident.effective_severity(&self.config.severities);
            push_unique(&mut distinct_categories, &incident.category);
        }

        let lighting_bonus = B::sanitise(self.lighting.bonus(point));
        let raw = self.config.base_score - category_penalty_total + lighting_bonus;

        PointScore {
            score: clamp_score(raw),
            nearby_incident_count: nearby.len(),
            category_penalty_total,
            lighting_bonus,
            distinct_categories,
        }
    }

    /// Score a route from its sampled vertices.
    ///
    /// # Errors
    /// Returns [`RouteError::EmptyGeometry`] when `path` has no vertices.
    #[expect(
        clippy::float_arithmetic,
        reason = "route score is the mean of point scores"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts are tiny and exactly representable"
    )]
    pub fn score_route(
        &self,
        store: &IncidentStore,
        path: &PathGeometry,
    ) -> Result<RouteScore, RouteError> {
        let sampled_points = sample_points(path, self.config.duplicate_samples)?;
        let point_scores = self.score_points(store, &sampled_points);

        let total: f64 = point_scores.iter().map(|point| point.score).sum();
        let safety_score = clamp_score(total / point_scores.len().max(1) as f64);

        let nearby_incidents = point_scores
            .iter()
            .map(|point| point.nearby_incident_count)
            .sum();
        let mut categories: Vec<String> = Vec::new();
        for category in point_scores
            .iter()
            .flat_map(|point| point.distinct_categories.iter())
        {
            push_unique(&mut categories, category);
        }

        Ok(RouteScore {
            safety_score,
            distance_metres: path.distance_metres,
            duration_seconds: path.duration_seconds,
            description: self.describe(safety_score),
            analysis_notes: self.analyse(safety_score, nearby_incidents, categories),
            sampled_points,
            geometry: path.clone(),
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn score_points(&self, store: &IncidentStore, points: &[GeoPoint]) -> Vec<PointScore> {
        points
            .iter()
            .map(|&point| self.score_point(store, point))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_points(&self, store: &IncidentStore, points: &[GeoPoint]) -> Vec<PointScore> {
        use rayon::prelude::*;

        points
            .par_iter()
            .map(|&point| self.score_point(store, point))
            .collect()
    }

    fn describe(&self, safety_score: f64) -> String {
        let mut description = format!("Safety Score: {safety_score:.1}/100.");
        if safety_score < self.config.high_risk_threshold {
            description.push_str(" High Risk Zone.");
        }
        description
    }

    fn analyse(
        &self,
        safety_score: f64,
        nearby_incidents: usize,
        mut categories: Vec<String>,
    ) -> Vec<AnalysisNote> {
        if safety_score > self.config.safe_threshold {
            return vec![AnalysisNote::SafeDistricts];
        }

        let mut notes = Vec::new();
        if nearby_incidents > 0 {
            notes.push(AnalysisNote::NearbyIncidents {
                count: nearby_incidents,
            });
        }
        categories.truncate(self.config.display_categories);
        if !categories.is_empty() {
            notes.push(AnalysisNote::MajorRisks { categories });
        }
        notes
    }
}

fn push_unique(categories: &mut Vec<String>, category: &str) {
    if !categories.iter().any(|seen| seen == category) {
        categories.push(category.to_owned());
    }
}

const fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_SCORE)
}

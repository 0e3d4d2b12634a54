//! Tunable parameters for point and route scoring.

use crate::SeverityTable;

/// Default search radius around each scored point, in metres.
pub const DEFAULT_RADIUS_METRES: f64 = 500.0;

/// Score assigned to a point with no nearby incidents.
pub const BASE_SCORE: f64 = 100.0;

/// Upper bound of every point and route score.
pub const MAX_SCORE: f64 = 100.0;

/// How repeated sample indices contribute to a route's mean score.
///
/// Short paths can select the same vertex more than once (a single-vertex
/// path selects it three times). `PerOccurrence` scores each selection, so a
/// repeated vertex is weighted by its multiplicity. `Deduplicate` keeps only
/// the first selection of each vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicateSamples {
    /// Score every selected index, repeats included.
    #[default]
    PerOccurrence,
    /// Score each distinct vertex once.
    Deduplicate,
}

/// Parameters shared by the point scorer and route aggregator.
///
/// # Examples
/// ```
/// use saferoute_core::{DuplicateSamples, ScoringConfig};
///
/// let config = ScoringConfig::default()
///     .with_radius_metres(250.0)
///     .with_duplicate_samples(DuplicateSamples::Deduplicate);
/// assert_eq!(config.radius_metres, 250.0);
/// assert_eq!(config.display_categories, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Radius of the incident search around each point, in metres.
    pub radius_metres: f64,
    /// Score before penalties and bonuses are applied.
    pub base_score: f64,
    /// Category weights for incidents without an explicit severity.
    pub severities: SeverityTable,
    /// Maximum number of categories named in the major-risks note.
    pub display_categories: usize,
    /// Mean score strictly above which a route is reported as safe.
    pub safe_threshold: f64,
    /// Mean score strictly below which a route is flagged as high risk.
    pub high_risk_threshold: f64,
    /// Treatment of repeated sample indices on short paths.
    pub duplicate_samples: DuplicateSamples,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            radius_metres: DEFAULT_RADIUS_METRES,
            base_score: BASE_SCORE,
            severities: SeverityTable::default(),
            display_categories: 3,
            safe_threshold: 80.0,
            high_risk_threshold: 50.0,
            duplicate_samples: DuplicateSamples::default(),
        }
    }
}

impl ScoringConfig {
    /// Set the incident search radius.
    #[must_use]
    pub const fn with_radius_metres(mut self, radius_metres: f64) -> Self {
        self.radius_metres = radius_metres;
        self
    }

    /// Replace the severity table.
    #[must_use]
    pub fn with_severities(mut self, severities: SeverityTable) -> Self {
        self.severities = severities;
        self
    }

    /// Set how many categories the major-risks note lists.
    #[must_use]
    pub const fn with_display_categories(mut self, display_categories: usize) -> Self {
        self.display_categories = display_categories;
        self
    }

    /// Choose how repeated sample indices are weighted.
    #[must_use]
    pub const fn with_duplicate_samples(mut self, duplicate_samples: DuplicateSamples) -> Self {
        self.duplicate_samples = duplicate_samples;
        self
    }
}

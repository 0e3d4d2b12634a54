//! Candidate route geometries and their safety assessments.

use std::fmt;

use thiserror::Error;

use crate::GeoPoint;

/// One candidate route as returned by a routing service.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, PathGeometry};
///
/// let path = PathGeometry::new(
///     vec![GeoPoint::new(28.6139, 77.2090), GeoPoint::new(28.6200, 77.2100)],
///     690.0,
///     75.0,
/// );
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.first(), Some(GeoPoint::new(28.6139, 77.2090)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathGeometry {
    /// Vertices from start to end.
    pub points: Vec<GeoPoint>,
    /// Route length reported by the routing service, in metres.
    pub distance_metres: f64,
    /// Travel time reported by the routing service, in seconds.
    pub duration_seconds: f64,
}

impl PathGeometry {
    /// Construct a geometry from its vertices and metadata.
    #[must_use]
    pub const fn new(points: Vec<GeoPoint>, distance_metres: f64, duration_seconds: f64) -> Self {
        Self {
            points,
            distance_metres,
            duration_seconds,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Report whether the geometry has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }
}

/// A finding reported alongside a route score.
///
/// The [`Display`](fmt::Display) form is the sentence shown to users.
///
/// # Examples
/// ```
/// use saferoute_core::AnalysisNote;
///
/// let note = AnalysisNote::MajorRisks {
///     categories: vec!["Theft".into(), "Robbery".into()],
/// };
/// assert_eq!(note.to_string(), "Major risks: Theft, Robbery");
/// assert_eq!(
///     AnalysisNote::NearbyIncidents { count: 4 }.to_string(),
///     "4 reported incidents nearby."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum AnalysisNote {
    /// The route scored above the safe threshold.
    SafeDistricts,
    /// Incidents were found near the sampled points.
    NearbyIncidents {
        /// Incidents summed over every sampled point.
        count: usize,
    },
    /// Incident categories seen along the route.
    MajorRisks {
        /// Categories in first-seen order, truncated for display.
        categories: Vec<String>,
    },
}

impl fmt::Display for AnalysisNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SafeDistricts => f.write_str("Route passes through statistically safe districts."),
            Self::NearbyIncidents { count } => write!(f, "{count} reported incidents nearby."),
            Self::MajorRisks { categories } => write!(f, "Major risks: {}", categories.join(", ")),
        }
    }
}

/// Safety assessment of one [`PathGeometry`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteScore {
    /// Mean of the sampled point scores, within `0.0..=100.0`.
    pub safety_score: f64,
    /// Route length in metres, copied from the geometry.
    pub distance_metres: f64,
    /// Travel time in seconds, copied from the geometry.
    pub duration_seconds: f64,
    /// One-line summary embedding the rounded score.
    pub description: String,
    /// Findings in the order they were produced.
    pub analysis_notes: Vec<AnalysisNote>,
    /// Points that contributed to the score, in scoring order.
    pub sampled_points: Vec<GeoPoint>,
    /// The scored geometry.
    pub geometry: PathGeometry,
}

/// Errors returned while scoring a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The geometry had no vertices to sample.
    #[error("route geometry has no vertices")]
    EmptyGeometry,
}

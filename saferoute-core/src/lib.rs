//! Core scoring engine for safety-aware route recommendations.
//!
//! The crate holds geolocated [`Incident`] records in an [`IncidentStore`],
//! scores points by the severity of incidents within a search radius, and
//! ranks candidate routes by the mean score of a handful of sampled vertices.
//! It performs no I/O: datasets are loaded and routes fetched by
//! collaborators such as `saferoute-data`.
//!
//! # Examples
//! ```
//! use saferoute_core::{GeoPoint, Incident, IncidentStore, PathGeometry, SafetyScorer};
//!
//! let store = IncidentStore::new(vec![Incident::new(GeoPoint::new(28.6139, 77.2090), "Theft")]);
//! let scorer: SafetyScorer = SafetyScorer::default();
//!
//! let quiet = PathGeometry::new(vec![GeoPoint::new(28.70, 77.10)], 900.0, 80.0);
//! let busy = PathGeometry::new(vec![GeoPoint::new(28.6140, 77.2090)], 800.0, 70.0);
//! let ranked = scorer.score_routes(&store, &[busy, quiet]);
//!
//! assert_eq!(ranked.routes[0].safety_score, 100.0);
//! assert_eq!(ranked.routes[1].safety_score, 97.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod distance;
pub mod incident;
pub mod lighting;
pub mod point;
pub mod provider;
pub mod ranking;
pub mod recommender;
pub mod route;
pub mod sampler;
pub mod scorer;
pub mod severity;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{BASE_SCORE, DEFAULT_RADIUS_METRES, DuplicateSamples, MAX_SCORE, ScoringConfig};
pub use distance::{EARTH_RADIUS_METRES, destination_point, haversine_distance};
pub use incident::{Incident, UNKNOWN_CATEGORY};
pub use lighting::{LightingBonus, NoLighting};
pub use point::GeoPoint;
pub use provider::{RouteProvider, RouteProviderError};
pub use ranking::{RankedRoutes, RejectedRoute, rank_routes};
pub use recommender::RouteRecommender;
pub use route::{AnalysisNote, PathGeometry, RouteError, RouteScore};
pub use sampler::{LONG_PATH_SAMPLES, SHORT_PATH_VERTICES, sample_indices, sample_points};
pub use scorer::{PointScore, SafetyScorer, score_point};
pub use severity::{DEFAULT_SEVERITY, SeverityTable};
pub use store::{IncidentStore, SharedIncidentStore};

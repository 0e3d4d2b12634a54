//! Choose which vertices of a route are scored.
//!
//! Short paths are sampled at their start, middle and end. Longer paths are
//! sampled at a fixed stride chosen so roughly [`LONG_PATH_SAMPLES`] vertices
//! are visited whatever the path length; the final vertex is always added.

use crate::{DuplicateSamples, GeoPoint, PathGeometry, RouteError};

/// Paths with at most this many vertices use the three-point rule.
pub const SHORT_PATH_VERTICES: usize = 10;

/// Approximate number of strided samples taken from a long path.
pub const LONG_PATH_SAMPLES: usize = 5;

/// Vertex indices to score for a path of `len` vertices.
///
/// Returns an empty list only when `len` is zero. Indices may repeat for
/// paths shorter than three vertices.
///
/// # Examples
/// ```
/// use saferoute_core::sample_indices;
///
/// assert_eq!(sample_indices(1), [0, 0, 0]);
/// assert_eq!(sample_indices(7), [0, 3, 6]);
/// assert_eq!(sample_indices(12), [0, 2, 4, 6, 8, 10, 11]);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "sample positions are floor divisions of the vertex count"
)]
pub fn sample_indices(len: usize) -> Vec<usize> {
    let Some(last) = len.checked_sub(1) else {
        return Vec::new();
    };
    if len <= SHORT_PATH_VERTICES {
        return vec![0, len / 2, last];
    }

    let stride = len / LONG_PATH_SAMPLES;
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// Points of `path` to score under the given duplicate policy.
///
/// # Errors
/// Returns [`RouteError::EmptyGeometry`] when the path has no vertices.
///
/// # Examples
/// ```
/// use saferoute_core::{DuplicateSamples, GeoPoint, PathGeometry, sample_points};
///
/// let only = GeoPoint::new(1.0, 2.0);
/// let path = PathGeometry::new(vec![only], 0.0, 0.0);
///
/// let every = sample_points(&path, DuplicateSamples::PerOccurrence)?;
/// assert_eq!(every, [only, only, only]);
///
/// let unique = sample_points(&path, DuplicateSamples::Deduplicate)?;
/// assert_eq!(unique, [only]);
/// # Ok::<(), saferoute_core::RouteError>(())
/// ```
pub fn sample_points(
    path: &PathGeometry,
    duplicates: DuplicateSamples,
) -> Result<Vec<GeoPoint>, RouteError> {
    let mut indices = sample_indices(path.len());
    if indices.is_empty() {
        return Err(RouteError::EmptyGeometry);
    }
    if duplicates == DuplicateSamples::Deduplicate {
        // Indices are non-decreasing, so repeats are adjacent.
        indices.dedup();
    }
    Ok(indices
        .into_iter()
        .filter_map(|index| path.points.get(index).copied())
        .collect())
}

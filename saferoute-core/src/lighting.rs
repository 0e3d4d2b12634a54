//! Lighting and infrastructure bonus applied on top of incident penalties.
//!
//! No lighting dataset ships with the engine. [`NoLighting`] keeps the bonus
//! at zero; an implementation backed by street-light or infrastructure data
//! can be swapped in through [`SafetyScorer::with_lighting`](crate::SafetyScorer::with_lighting)
//! without changing how scores are computed.

use crate::GeoPoint;

/// Source of a non-negative bonus added to a point's score.
///
/// Implementations must be thread-safe so points can be scored in parallel.
/// Use [`LightingBonus::sanitise`] to guard raw values.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, LightingBonus};
///
/// struct Floodlit;
///
/// impl LightingBonus for Floodlit {
///     fn bonus(&self, _point: GeoPoint) -> f64 {
///         5.0
///     }
/// }
///
/// assert_eq!(Floodlit.bonus(GeoPoint::new(0.0, 0.0)), 5.0);
/// assert_eq!(<Floodlit as LightingBonus>::sanitise(-3.0), 0.0);
/// ```
pub trait LightingBonus: Send + Sync {
    /// Bonus for `point`; `0.0` when nothing is known about it.
    fn bonus(&self, point: GeoPoint) -> f64;

    /// Return `0.0` for negative or non-finite bonuses.
    fn sanitise(bonus: f64) -> f64
    where
        Self: Sized,
    {
        if bonus.is_finite() && bonus > 0.0 {
            bonus
        } else {
            0.0
        }
    }
}

/// Bonus source used when no lighting data is available.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoLighting;

impl LightingBonus for NoLighting {
    fn bonus(&self, _point: GeoPoint) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4.5, 4.5)]
    #[case(0.0, 0.0)]
    #[case(-2.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    fn sanitise_discards_invalid_bonuses(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(NoLighting::sanitise(raw), expected);
    }

    #[rstest]
    fn no_lighting_is_always_zero() {
        assert_eq!(NoLighting.bonus(GeoPoint::new(51.5, -0.1)), 0.0);
    }
}

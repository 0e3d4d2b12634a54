//! Geolocated safety incidents.

use crate::{GeoPoint, SeverityTable};

/// Category assigned to incidents whose source row names none.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A single reported safety event.
///
/// Incidents are immutable once loaded. The optional `severity` overrides the
/// category lookup; see [`Incident::effective_severity`].
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, Incident, SeverityTable};
///
/// let theft = Incident::new(GeoPoint::new(28.6139, 77.2090), "Theft");
/// assert_eq!(theft.effective_severity(&SeverityTable::default()), 3.0);
///
/// let weighted = theft.clone().with_severity(8.0);
/// assert_eq!(weighted.effective_severity(&SeverityTable::default()), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    /// Where the incident was reported.
    pub location: GeoPoint,
    /// Free-form category label such as `"Theft"` or `"Murder"`.
    pub category: String,
    /// Explicit penalty weight, when the dataset supplies one.
    pub severity: Option<f64>,
}

impl Incident {
    /// Construct an incident without an explicit severity.
    pub fn new(location: GeoPoint, category: impl Into<String>) -> Self {
        Self {
            location,
            category: category.into(),
            severity: None,
        }
    }

    /// Construct an incident labelled [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn uncategorised(location: GeoPoint) -> Self {
        Self::new(location, UNKNOWN_CATEGORY)
    }

    /// Attach an explicit severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: f64) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Penalty this incident contributes to a point score.
    ///
    /// Explicit severities that are negative or non-finite are ignored in
    /// favour of the category table so a penalty can never raise a score.
    #[must_use]
    pub fn effective_severity(&self, table: &SeverityTable) -> f64 {
        self.severity
            .filter(|severity| severity.is_finite() && *severity >= 0.0)
            .unwrap_or_else(|| table.severity_for(&self.category))
    }
}

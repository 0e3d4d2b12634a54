//! Category-to-severity lookup used when an incident carries no explicit
//! weight.

use std::collections::HashMap;

/// Severity applied to categories the table does not list.
pub const DEFAULT_SEVERITY: f64 = 2.0;

const VIOLENT_SEVERITY: f64 = 5.0;
const PROPERTY_SEVERITY: f64 = 3.0;

const VIOLENT_CATEGORIES: [&str; 4] = ["Murder", "Rape", "Kidnapping", "Robbery"];
const PROPERTY_CATEGORIES: [&str; 2] = ["Theft", "Burglary"];

/// Maps incident categories to penalty weights.
///
/// Lookups are exact and case-sensitive; unmapped categories fall back to
/// [`SeverityTable::fallback`].
///
/// # Examples
/// ```
/// use saferoute_core::SeverityTable;
///
/// let table = SeverityTable::default();
/// assert_eq!(table.severity_for("Murder"), 5.0);
/// assert_eq!(table.severity_for("Theft"), 3.0);
/// assert_eq!(table.severity_for("Vandalism"), 2.0);
///
/// let custom = SeverityTable::empty(1.0).with_category("Arson", 4.5);
/// assert_eq!(custom.severity_for("Arson"), 4.5);
/// assert_eq!(custom.severity_for("Murder"), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeverityTable {
    weights: HashMap<String, f64>,
    fallback: f64,
}

impl SeverityTable {
    /// Construct a table with no mapped categories.
    #[must_use]
    pub fn empty(fallback: f64) -> Self {
        Self {
            weights: HashMap::new(),
            fallback,
        }
    }

    /// Map `category` to `severity`, replacing any previous mapping.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, severity: f64) -> Self {
        self.weights.insert(category.into(), severity);
        self
    }

    /// Severity for `category`, or the fallback when unmapped.
    #[must_use]
    pub fn severity_for(&self, category: &str) -> f64 {
        self.weights.get(category).copied().unwrap_or(self.fallback)
    }

    /// Severity applied to unmapped categories.
    #[must_use]
    pub const fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Number of explicitly mapped categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether no categories are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        let violent = VIOLENT_CATEGORIES
            .iter()
            .map(|&category| (category.to_owned(), VIOLENT_SEVERITY));
        let property = PROPERTY_CATEGORIES
            .iter()
            .map(|&category| (category.to_owned(), PROPERTY_SEVERITY));
        Self {
            weights: violent.chain(property).collect(),
            fallback: DEFAULT_SEVERITY,
        }
    }
}

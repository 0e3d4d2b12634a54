//! Load incident datasets from headed CSV tables.
//!
//! The table must carry [`LATITUDE_COLUMN`] and [`LONGITUDE_COLUMN`];
//! [`CATEGORY_COLUMN`] and [`SEVERITY_COLUMN`] are optional. Column order is
//! irrelevant and unknown columns are ignored.
//!
//! A row is skipped, and counted in [`LoadSummary::rows_skipped`], when its
//! coordinates are missing, unparseable, non-finite or outside the valid
//! latitude and longitude ranges. A blank category becomes
//! [`saferoute_core::UNKNOWN_CATEGORY`]; a blank or unparseable severity
//! leaves the category table in charge.

mod error;

pub use error::IncidentLoadError;

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::File};
use csv::{ReaderBuilder, StringRecord};
use saferoute_core::{GeoPoint, Incident, IncidentStore, SharedIncidentStore, UNKNOWN_CATEGORY};

/// Header of the required latitude column.
pub const LATITUDE_COLUMN: &str = "Latitude";
/// Header of the required longitude column.
pub const LONGITUDE_COLUMN: &str = "Longitude";
/// Header of the optional category column.
pub const CATEGORY_COLUMN: &str = "Crime Type";
/// Header of the optional explicit severity column.
pub const SEVERITY_COLUMN: &str = "Severity";

/// Row counts from a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data rows encountered, excluding the header.
    pub rows_read: usize,
    /// Rows that became incidents.
    pub incidents_loaded: usize,
    /// Rows dropped for unusable coordinates or malformed CSV.
    pub rows_skipped: usize,
}

/// A freshly built store and the counts describing how it was built.
#[derive(Debug)]
pub struct LoadedIncidents {
    /// Indexed incidents in dataset order.
    pub store: IncidentStore,
    /// Row accounting for the load.
    pub summary: LoadSummary,
}

/// Positions of the recognised columns within a header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    latitude: usize,
    longitude: usize,
    category: Option<usize>,
    severity: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, IncidentLoadError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
        };
        let latitude = position(LATITUDE_COLUMN);
        let longitude = position(LONGITUDE_COLUMN);
        let (Some(lat_index), Some(lon_index)) = (latitude, longitude) else {
            let missing = [(latitude, LATITUDE_COLUMN), (longitude, LONGITUDE_COLUMN)]
                .into_iter()
                .filter_map(|(found, name)| found.is_none().then_some(name))
                .collect();
            return Err(IncidentLoadError::Schema { missing });
        };
        Ok(Self {
            latitude: lat_index,
            longitude: lon_index,
            category: position(CATEGORY_COLUMN),
            severity: position(SEVERITY_COLUMN),
        })
    }

    fn incident(self, record: &StringRecord) -> Option<Incident> {
        let latitude = record
            .get(self.latitude)
            .and_then(parse_finite)
            .filter(|lat| (-90.0..=90.0).contains(lat))?;
        let longitude = record
            .get(self.longitude)
            .and_then(parse_finite)
            .filter(|lon| (-180.0..=180.0).contains(lon))?;
        let category = self
            .category
            .and_then(|index| record.get(index))
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(UNKNOWN_CATEGORY);
        Some(Incident {
            location: GeoPoint::new(latitude, longitude),
            category: category.to_owned(),
            severity: self
                .severity
                .and_then(|index| record.get(index))
                .and_then(parse_finite),
        })
    }
}

fn parse_finite(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Load incidents from any CSV byte source.
///
/// # Errors
/// Returns [`IncidentLoadError::Schema`] when a coordinate column is absent
/// and [`IncidentLoadError::DataLoad`] when the source fails mid-read.
///
/// # Examples
/// ```
/// use saferoute_data::load_incidents_from_reader;
///
/// let csv = "Latitude,Longitude,Crime Type\n28.61,77.20,Theft\n,77.21,Robbery\n";
/// let loaded = load_incidents_from_reader(csv.as_bytes())?;
///
/// assert_eq!(loaded.store.len(), 1);
/// assert_eq!(loaded.summary.rows_skipped, 1);
/// # Ok::<(), saferoute_data::IncidentLoadError>(())
/// ```
pub fn load_incidents_from_reader<R: Read>(reader: R) -> Result<LoadedIncidents, IncidentLoadError> {
    let mut rows = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rows
        .headers()
        .map_err(IncidentLoadError::from_reader)?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut incidents = Vec::new();
    let mut summary = LoadSummary::default();
    for row in rows.records() {
        summary.rows_read += 1;
        match row {
            Ok(record) => {
                if let Some(incident) = columns.incident(&record) {
                    incidents.push(incident);
                } else {
                    summary.rows_skipped += 1;
                    log::trace!("skipping row without usable coordinates: {record:?}");
                }
            }
            Err(err) if err.is_io_error() => return Err(IncidentLoadError::from_reader(err)),
            Err(err) => {
                summary.rows_skipped += 1;
                log::trace!("skipping malformed row: {err}");
            }
        }
    }
    summary.incidents_loaded = incidents.len();

    if summary.rows_skipped > 0 {
        log::warn!(
            "Skipped {} of {} incident rows without usable coordinates",
            summary.rows_skipped,
            summary.rows_read
        );
    }
    log::info!(
        "Loaded {} incidents from {} rows",
        summary.incidents_loaded,
        summary.rows_read
    );
    Ok(LoadedIncidents {
        store: IncidentStore::new(incidents),
        summary,
    })
}

/// Load incidents from a CSV file.
///
/// # Errors
/// As [`load_incidents_from_reader`], plus [`IncidentLoadError::DataLoad`]
/// when the file cannot be opened.
pub fn load_incidents(path: &Utf8Path) -> Result<LoadedIncidents, IncidentLoadError> {
    let file = File::open_ambient(path, ambient_authority())
        .map_err(|err| IncidentLoadError::from_reader(err.into()).at_path(path))?;
    load_incidents_from_reader(file).map_err(|err| err.at_path(path))
}

/// Load incidents, falling back to an empty store when loading fails.
///
/// The failure is logged at error level so the service can start degraded
/// and answer every query with the base score.
#[must_use]
pub fn load_incidents_or_empty(path: &Utf8Path) -> LoadedIncidents {
    load_incidents(path).unwrap_or_else(|err| {
        log::error!("{err}; continuing with an empty incident store");
        LoadedIncidents {
            store: IncidentStore::empty(),
            summary: LoadSummary::default(),
        }
    })
}

/// Rebuild the dataset at `path` and publish it through `shared`.
///
/// The previous store stays in service when loading fails, so readers never
/// observe a partial or empty replacement.
///
/// # Errors
/// Propagates any [`load_incidents`] failure.
pub fn reload_incidents(
    shared: &SharedIncidentStore,
    path: &Utf8Path,
) -> Result<LoadSummary, IncidentLoadError> {
    let loaded = load_incidents(path)?;
    shared.replace(loaded.store);
    Ok(loaded.summary)
}

//! Test helpers for composing incident datasets on disk.

use crate::CliError;
use crate::route::{RouteConfig, RouteProviderFactory};
use camino::{Utf8Path, Utf8PathBuf};
use saferoute_core::test_support::FixedRouteProvider;
use saferoute_core::{GeoPoint, PathGeometry, RouteProvider};
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

/// Latitude of the location most fixtures revolve around.
pub(super) const CENTRE_LAT: f64 = 28.6139;
/// Longitude of the location most fixtures revolve around.
pub(super) const CENTRE_LON: f64 = 77.209;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding an incident dataset.
#[derive(Debug)]
pub(super) struct DatasetDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl DatasetDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            path: root.join("incidents.csv"),
            _dir: dir,
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Write `count` incidents of `category` at the centre location.
    pub(super) fn write_incidents(&self, category: &str, count: usize) {
        let mut contents = String::from("Latitude,Longitude,Crime Type\n");
        for _ in 0..count {
            writeln!(contents, "{CENTRE_LAT},{CENTRE_LON},{category}").expect("write to string");
        }
        write_utf8(&self.path, contents.as_bytes());
    }

    pub(super) fn write_raw(&self, contents: &str) {
        write_utf8(&self.path, contents.as_bytes());
    }
}

/// Factory handing out a canned provider instead of contacting OSRM.
#[derive(Debug, Clone)]
pub(super) struct StubProviderFactory {
    pub(super) provider: FixedRouteProvider,
}

impl RouteProviderFactory for StubProviderFactory {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        Ok(Box::new(self.provider.clone()))
    }
}

/// A geometry starting at the centre and heading north-east.
pub(super) fn path_through_centre() -> PathGeometry {
    PathGeometry::new(
        vec![
            GeoPoint::new(CENTRE_LAT, CENTRE_LON),
            GeoPoint::new(28.63, 77.22),
            GeoPoint::new(28.65, 77.23),
        ],
        5_000.0,
        600.0,
    )
}

/// A geometry that stays well clear of the centre.
pub(super) fn path_avoiding_centre() -> PathGeometry {
    PathGeometry::new(
        vec![
            GeoPoint::new(28.60, 77.25),
            GeoPoint::new(28.62, 77.26),
            GeoPoint::new(28.65, 77.23),
        ],
        6_400.0,
        750.0,
    )
}

#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for CSV incident loading.

use std::cell::RefCell;
use std::fmt::Write as _;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use saferoute_core::SharedIncidentStore;
use saferoute_data::{
    IncidentLoadError, LONGITUDE_COLUMN, LoadedIncidents, load_incidents, load_incidents_or_empty,
    reload_incidents,
};
use tempfile::TempDir;

/// World state for dataset loading scenarios.
struct LoadingWorld {
    dir: TempDir,
    outcome: RefCell<Option<Result<LoadedIncidents, IncidentLoadError>>>,
    shared: RefCell<Option<SharedIncidentStore>>,
}

#[fixture]
fn world() -> LoadingWorld {
    LoadingWorld {
        dir: TempDir::new().expect("create temporary directory"),
        outcome: RefCell::new(None),
        shared: RefCell::new(None),
    }
}

impl LoadingWorld {
    fn path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join("incidents.csv"))
            .expect("temporary paths are UTF-8")
    }

    fn write(&self, contents: &str) {
        std::fs::write(self.path(), contents).expect("write dataset");
    }
}

#[given("a dataset with {located:usize} located rows and {unlocated:usize} rows missing a latitude")]
fn given_dataset(world: &LoadingWorld, located: usize, unlocated: usize) {
    let mut contents = String::from("Latitude,Longitude,Crime Type\n");
    for _ in 0..located {
        contents.push_str("28.6139,77.2090,Theft\n");
    }
    for row in 0..unlocated {
        writeln!(contents, ",77.2090,Robbery {row}").expect("write to string");
    }
    world.write(&contents);
}

#[given("a dataset without a longitude column")]
fn given_no_longitude(world: &LoadingWorld) {
    world.write("Latitude,Crime Type\n28.6139,Theft\n");
}

#[given("no dataset file")]
fn given_no_file(world: &LoadingWorld) {
    assert!(!world.path().exists());
}

#[given("the dataset is published to a shared store")]
fn given_published(world: &LoadingWorld) {
    let loaded = load_incidents(&world.path()).expect("dataset loads");
    world
        .shared
        .replace(Some(SharedIncidentStore::new(loaded.store)));
}

#[when("I load the dataset")]
fn when_load(world: &LoadingWorld) {
    world.outcome.replace(Some(load_incidents(&world.path())));
}

#[when("I load the dataset allowing a degraded start")]
fn when_load_degraded(world: &LoadingWorld) {
    world
        .outcome
        .replace(Some(Ok(load_incidents_or_empty(&world.path()))));
}

#[when("the dataset is replaced by one without a longitude column and reloaded")]
fn when_reload_broken(world: &LoadingWorld) {
    world.write("Latitude,Crime Type\n28.6139,Theft\n");
    let borrowed = world.shared.borrow();
    let shared = borrowed.as_ref().expect("shared store configured");
    let err = reload_incidents(shared, &world.path()).expect_err("reload rejects the dataset");
    assert!(matches!(err, IncidentLoadError::Schema { .. }));
}

#[then("{count:usize} incidents are loaded")]
fn then_loaded(world: &LoadingWorld, count: usize) {
    let borrowed = world.outcome.borrow();
    let loaded = borrowed
        .as_ref()
        .expect("dataset load attempted")
        .as_ref()
        .expect("dataset loaded");
    assert_eq!(loaded.store.len(), count);
    assert_eq!(loaded.summary.incidents_loaded, count);
}

#[then("{count:usize} rows are reported as skipped")]
fn then_skipped(world: &LoadingWorld, count: usize) {
    let borrowed = world.outcome.borrow();
    let loaded = borrowed
        .as_ref()
        .expect("dataset load attempted")
        .as_ref()
        .expect("dataset loaded");
    assert_eq!(loaded.summary.rows_skipped, count);
}

#[then("loading fails with a schema error naming Longitude")]
fn then_schema_error(world: &LoadingWorld) {
    let borrowed = world.outcome.borrow();
    let outcome = borrowed.as_ref().expect("dataset load attempted");
    match outcome {
        Err(IncidentLoadError::Schema { missing }) => assert_eq!(missing, &[LONGITUDE_COLUMN]),
        Err(other) => panic!("expected schema error, got {other:?}"),
        Ok(loaded) => panic!("expected schema error, loaded {:?}", loaded.summary),
    }
}

#[then("the shared store still holds {count:usize} incidents")]
fn then_shared(world: &LoadingWorld, count: usize) {
    let borrowed = world.shared.borrow();
    let shared = borrowed.as_ref().expect("shared store configured");
    assert_eq!(shared.snapshot().len(), count);
}

#[scenario(path = "tests/features/incident_loading.feature", index = 0)]
fn skipped_rows(world: LoadingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/incident_loading.feature", index = 1)]
fn missing_longitude(world: LoadingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/incident_loading.feature", index = 2)]
fn degraded_start(world: LoadingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/incident_loading.feature", index = 3)]
fn failed_reload(world: LoadingWorld) {
    let _ = world;
}

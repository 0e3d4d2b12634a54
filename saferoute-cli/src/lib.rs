//! Command-line interface for the SafeRoute engine.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use saferoute_core::{GeoPoint, IncidentStore};
use serde::Serialize;

mod error;
mod route;
mod score;

pub use error::CliError;

use route::RouteArgs;
use score::ScoreArgs;

pub(crate) const ARG_INCIDENTS: &str = "incidents";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LON: &str = "lon";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_START_LAT: &str = "start-lat";
pub(crate) const ARG_START_LON: &str = "start-lon";
pub(crate) const ARG_END_LAT: &str = "end-lat";
pub(crate) const ARG_END_LON: &str = "end-lon";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ENV_SCORE_INCIDENTS: &str = "SAFEROUTE_CMDS_SCORE_INCIDENTS";
pub(crate) const ENV_SCORE_LAT: &str = "SAFEROUTE_CMDS_SCORE_LAT";
pub(crate) const ENV_SCORE_LON: &str = "SAFEROUTE_CMDS_SCORE_LON";
pub(crate) const ENV_ROUTE_INCIDENTS: &str = "SAFEROUTE_CMDS_ROUTE_INCIDENTS";
pub(crate) const ENV_ROUTE_START_LAT: &str = "SAFEROUTE_CMDS_ROUTE_START_LAT";
pub(crate) const ENV_ROUTE_START_LON: &str = "SAFEROUTE_CMDS_ROUTE_START_LON";
pub(crate) const ENV_ROUTE_END_LAT: &str = "SAFEROUTE_CMDS_ROUTE_END_LAT";
pub(crate) const ENV_ROUTE_END_LON: &str = "SAFEROUTE_CMDS_ROUTE_END_LON";

/// Run the SafeRoute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => score::run_score(args, &mut stdout),
        Command::Route(args) => route::run_route(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "saferoute",
    about = "Score locations and rank routes by reported safety incidents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single location against an incident dataset.
    Score(ScoreArgs),
    /// Fetch candidate routes and rank them safest first.
    Route(RouteArgs),
}

/// Require a merged option, naming its flag and environment variable.
fn require<T>(value: Option<T>, field: &'static str, env: &'static str) -> Result<T, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

/// Validate a `(latitude, longitude)` pair supplied under the given flags.
fn checked_point(
    (latitude, lat_field): (f64, &'static str),
    (longitude, lon_field): (f64, &'static str),
) -> Result<GeoPoint, CliError> {
    let within = |value: f64, field: &'static str, limit: f64| {
        if value.is_finite() && value.abs() <= limit {
            Ok(value)
        } else {
            Err(CliError::InvalidCoordinate {
                field,
                limit,
                value,
            })
        }
    };
    Ok(GeoPoint::new(
        within(latitude, lat_field, 90.0)?,
        within(longitude, lon_field, 180.0)?,
    ))
}

fn load_store(path: &Utf8Path) -> Result<IncidentStore, CliError> {
    saferoute_data::load_incidents(path)
        .map(|loaded| loaded.store)
        .map_err(|source| CliError::LoadIncidents {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(writer: &mut dyn Write, payload: &T) -> Result<(), CliError> {
    let encoded = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(encoded.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

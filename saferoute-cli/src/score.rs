//! Score command implementation for the SafeRoute CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saferoute_core::{DEFAULT_RADIUS_METRES, GeoPoint, PointScore, SafetyScorer, ScoringConfig};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_INCIDENTS, ARG_LAT, ARG_LON, ARG_RADIUS, CliError, ENV_SCORE_INCIDENTS, ENV_SCORE_LAT,
    ENV_SCORE_LON, checked_point, load_store, require, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one location from 0 (unsafe) to 100 (no nearby \
                 incidents). Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Score the safety of a single location"
)]
#[ortho_config(prefix = "SAFEROUTE")]
pub(crate) struct ScoreArgs {
    /// Path to the incident CSV dataset.
    #[arg(long = ARG_INCIDENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) incidents: Option<Utf8PathBuf>,
    /// Latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Search radius in metres (defaults to 500).
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the incident dataset.
    pub(crate) incidents: Utf8PathBuf,
    /// Location to score.
    pub(crate) location: GeoPoint,
    /// Spatial query radius in metres.
    pub(crate) radius_metres: f64,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let incidents = require(args.incidents, ARG_INCIDENTS, ENV_SCORE_INCIDENTS)?;
        let lat = require(args.lat, ARG_LAT, ENV_SCORE_LAT)?;
        let lon = require(args.lon, ARG_LON, ENV_SCORE_LON)?;
        let location = checked_point((lat, ARG_LAT), (lon, ARG_LON))?;
        let radius_metres = args.radius.unwrap_or(DEFAULT_RADIUS_METRES);
        if !radius_metres.is_finite() || radius_metres < 0.0 {
            return Err(CliError::InvalidRadius {
                value: radius_metres,
            });
        }
        Ok(Self {
            incidents,
            location,
            radius_metres,
        })
    }
}

/// JSON document printed by the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoreReport {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) score: f64,
    pub(crate) details: ScoreDetails,
}

/// Breakdown of a point score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ScoreDetails {
    pub(crate) incidents_nearby: usize,
    pub(crate) incident_penalty: f64,
    pub(crate) lighting_bonus: f64,
    pub(crate) incident_types: Vec<String>,
    pub(crate) radius_metres: f64,
}

impl ScoreReport {
    fn new(config: &ScoreConfig, scored: PointScore) -> Self {
        Self {
            latitude: config.location.latitude,
            longitude: config.location.longitude,
            score: scored.score,
            details: ScoreDetails {
                incidents_nearby: scored.nearby_incident_count,
                incident_penalty: scored.category_penalty_total,
                lighting_bonus: scored.lighting_bonus,
                incident_types: scored.distinct_categories,
                radius_metres: config.radius_metres,
            },
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_score(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let store = load_store(&config.incidents)?;
    let scorer = SafetyScorer::new(ScoringConfig::default().with_radius_metres(config.radius_metres));
    let scored = scorer.score_point(&store, config.location);
    log::info!(
        "Scored ({}, {}) at {:.1} from {} nearby incidents",
        config.location.latitude,
        config.location.longitude,
        scored.score,
        scored.nearby_incident_count
    );
    Ok(ScoreReport::new(config, scored))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

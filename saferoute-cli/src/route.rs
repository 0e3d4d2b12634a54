//! Route command implementation for the SafeRoute CLI.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saferoute_core::{
    GeoPoint, RankedRoutes, RouteProvider, RouteRecommender, RouteScore, SafetyScorer,
    SharedIncidentStore,
};
use saferoute_data::{HttpRouteProvider, HttpRouteProviderConfig};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_END_LAT, ARG_END_LON, ARG_INCIDENTS, ARG_OSRM_BASE_URL, ARG_PROFILE, ARG_START_LAT,
    ARG_START_LON, ARG_TIMEOUT_SECS, CliError, ENV_ROUTE_END_LAT, ENV_ROUTE_END_LON,
    ENV_ROUTE_INCIDENTS, ENV_ROUTE_START_LAT, ENV_ROUTE_START_LON, checked_point, load_store,
    require, write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Ask an OSRM service for a route and its alternatives, \
                 score each against the incident dataset, and print them \
                 safest first. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank candidate routes by safety"
)]
#[ortho_config(prefix = "SAFEROUTE")]
pub(crate) struct RouteArgs {
    /// Path to the incident CSV dataset.
    #[arg(long = ARG_INCIDENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) incidents: Option<Utf8PathBuf>,
    /// Start latitude in decimal degrees.
    #[arg(long = ARG_START_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lat: Option<f64>,
    /// Start longitude in decimal degrees.
    #[arg(long = ARG_START_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lon: Option<f64>,
    /// Destination latitude in decimal degrees.
    #[arg(long = ARG_END_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) end_lat: Option<f64>,
    /// Destination longitude in decimal degrees.
    #[arg(long = ARG_END_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) end_lon: Option<f64>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// OSRM routing profile (e.g. "driving", "foot").
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the incident dataset.
    pub(crate) incidents: Utf8PathBuf,
    /// Journey origin.
    pub(crate) start: GeoPoint,
    /// Journey destination.
    pub(crate) end: GeoPoint,
    /// Routing service settings.
    pub(crate) provider: HttpRouteProviderConfig,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let incidents = require(args.incidents, ARG_INCIDENTS, ENV_ROUTE_INCIDENTS)?;
        let start = checked_point(
            (
                require(args.start_lat, ARG_START_LAT, ENV_ROUTE_START_LAT)?,
                ARG_START_LAT,
            ),
            (
                require(args.start_lon, ARG_START_LON, ENV_ROUTE_START_LON)?,
                ARG_START_LON,
            ),
        )?;
        let end = checked_point(
            (
                require(args.end_lat, ARG_END_LAT, ENV_ROUTE_END_LAT)?,
                ARG_END_LAT,
            ),
            (
                require(args.end_lon, ARG_END_LON, ENV_ROUTE_END_LON)?,
                ARG_END_LON,
            ),
        )?;

        let mut provider = HttpRouteProviderConfig::default();
        if let Some(base_url) = args.osrm_base_url {
            provider.base_url = base_url;
        }
        if let Some(profile) = args.profile {
            provider = provider.with_profile(profile);
        }
        if let Some(secs) = args.timeout_secs {
            provider = provider.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            incidents,
            start,
            end,
            provider,
        })
    }
}

/// Builds the route provider for the current invocation.
pub(crate) trait RouteProviderFactory {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError>;
}

pub(crate) struct HttpRouteProviderFactory;

impl RouteProviderFactory for HttpRouteProviderFactory {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        let provider = HttpRouteProvider::with_config(config.provider.clone()).map_err(|source| {
            CliError::BuildRouteProvider {
                base_url: config.provider.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

/// JSON document printed by the `route` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteReport {
    pub(crate) routes: Vec<RankedRouteReport>,
    pub(crate) rejected: Vec<RejectedRouteReport>,
}

/// One scored candidate, in ranking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RankedRouteReport {
    pub(crate) safety_score: f64,
    pub(crate) distance_metres: f64,
    pub(crate) duration_seconds: f64,
    pub(crate) description: String,
    pub(crate) analysis: Vec<String>,
    pub(crate) points: Vec<GeoPoint>,
}

/// A candidate excluded from ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RejectedRouteReport {
    pub(crate) index: usize,
    pub(crate) reason: String,
}

impl From<RouteScore> for RankedRouteReport {
    fn from(route: RouteScore) -> Self {
        Self {
            safety_score: round_to_tenth(route.safety_score),
            distance_metres: route.distance_metres,
            duration_seconds: route.duration_seconds,
            description: route.description,
            analysis: route
                .analysis_notes
                .iter()
                .map(ToString::to_string)
                .collect(),
            points: route.geometry.points,
        }
    }
}

impl From<RankedRoutes> for RouteReport {
    fn from(ranked: RankedRoutes) -> Self {
        Self {
            routes: ranked.routes.into_iter().map(RankedRouteReport::from).collect(),
            rejected: ranked
                .rejected
                .into_iter()
                .map(|rejected| RejectedRouteReport {
                    index: rejected.index,
                    reason: rejected.error.to_string(),
                })
                .collect(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "display rounding to one decimal place"
)]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_route_with(args, &HttpRouteProviderFactory, writer)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    factory: &dyn RouteProviderFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_route(&config, factory)?;
    write_json(writer, &report)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    factory: &dyn RouteProviderFactory,
) -> Result<RouteReport, CliError> {
    let store = load_store(&config.incidents)?;
    let provider = factory.build(config)?;
    let recommender = RouteRecommender::new(
        Arc::new(SharedIncidentStore::new(store)),
        &*provider,
        SafetyScorer::default(),
    );
    let ranked = recommender
        .recommend(config.start, config.end)
        .map_err(CliError::FetchRoutes)?;
    Ok(RouteReport::from(ranked))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}

//! Error types emitted by the SafeRoute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use saferoute_core::RouteProviderError;
use saferoute_data::{IncidentLoadError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the SafeRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A coordinate is non-finite or outside its valid range.
    #[error("--{field} must be a finite value within ±{limit} degrees, got {value}")]
    InvalidCoordinate {
        /// Flag that carried the coordinate.
        field: &'static str,
        /// Largest accepted absolute value in degrees.
        limit: f64,
        /// Rejected value.
        value: f64,
    },
    /// The search radius is negative or non-finite.
    #[error("--radius must be a finite, non-negative number of metres, got {value}")]
    InvalidRadius {
        /// Rejected radius in metres.
        value: f64,
    },
    /// The incident dataset could not be loaded.
    #[error("failed to load incidents from {path:?}: {source}")]
    LoadIncidents {
        /// Dataset location.
        path: Utf8PathBuf,
        /// Loader failure.
        #[source]
        source: IncidentLoadError,
    },
    /// Constructing the route provider failed.
    #[error("failed to build route provider for {base_url:?}: {source}")]
    BuildRouteProvider {
        /// Routing service the provider was built for.
        base_url: String,
        /// Client or runtime construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The routing service returned no usable candidates.
    #[error("failed to fetch candidate routes: {0}")]
    FetchRoutes(#[source] RouteProviderError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

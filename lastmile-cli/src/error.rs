//! Error types emitted by the Lastmile CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lastmile_core::FuelParamsError;
use lastmile_directions::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Lastmile CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// The path that failed validation.
        path: Utf8PathBuf,
    },
    /// Opening the render plan file failed.
    #[error("failed to open render plan at {path:?}: {source}")]
    OpenPlan {
        /// Location of the render plan.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The render plan was not valid JSON for a plan document.
    #[error("failed to parse render plan at {path:?}: {source}")]
    ParsePlan {
        /// Location of the render plan.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The fuel parameters did not validate.
    #[error("invalid fuel parameters: {0}")]
    InvalidFuelParameters(#[from] FuelParamsError),
    /// Building the OSRM-backed directions service failed.
    #[error("failed to build directions service for {base_url}: {source}")]
    BuildDirectionsService {
        /// The configured OSRM base URL.
        base_url: String,
        /// Construction failure detail.
        #[source]
        source: ProviderBuildError,
    },
    /// Serialising the render report failed.
    #[error("failed to serialise render report: {0}")]
    SerialiseReport(serde_json::Error),
    /// Writing the render report failed.
    #[error("failed to write render report: {0}")]
    WriteReport(std::io::Error),
}

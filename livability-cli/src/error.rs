//! Error types emitted by the livability CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use livability_scorer::ScoringOptionsError;
use thiserror::Error;

/// Errors emitted by the livability CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing {field} path (pass <path> or set {env})")]
    MissingPositional {
        field: &'static str,
        env: &'static str,
    },
    /// A coordinate was not a finite value within its valid range.
    #[error("{field} {value} is outside the valid range {min}..={max}")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The merged scoring options failed validation.
    #[error("invalid scoring options: {0}")]
    InvalidOptions(#[from] ScoringOptionsError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The amenities file could not be decoded.
    #[error("failed to parse amenities JSON at {path:?}: {source}")]
    ParseAmenities {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The targets file could not be decoded.
    #[error("failed to parse targets JSON at {path:?}: {source}")]
    ParseTargets {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

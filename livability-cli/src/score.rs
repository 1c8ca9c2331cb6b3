//! Score command implementation for the livability CLI.

use std::collections::BTreeMap;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use livability_core::{Amenity, AmenityCategory, TravelMode};
use livability_fs::open_utf8_file;
use livability_scorer::{ScoreResult, ScoringOptions, compute_scores};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_AMENITIES, ARG_LAT, ARG_LNG, ARG_TARGETS, CliError, ENV_AMENITIES, ENV_LAT, ENV_LNG};

const ARG_WALKING_RADIUS: &str = "walking-radius-km";
const ARG_DRIVING_RADIUS: &str = "driving-radius-km";
const ARG_URBAN_RADIUS: &str = "urban-radius-km";
const ARG_URBAN_THRESHOLD: &str = "urban-threshold";
const ARG_SUBURBAN_THRESHOLD: &str = "suburban-threshold";

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a location from a JSON list of nearby amenities. \
                 The file may hold a bare array or an object with an \
                 `amenities` array. Radii, thresholds and target overrides \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Compute walking, driving and urban scores for a location"
)]
#[ortho_config(prefix = "LIVABILITY")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file of amenities.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) amenities_path: Option<Utf8PathBuf>,
    /// Latitude of the location in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the location in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Radius for the walking score (default 1.0).
    #[arg(long = ARG_WALKING_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) walking_radius_km: Option<f64>,
    /// Radius for the driving score (default 5.0).
    #[arg(long = ARG_DRIVING_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) driving_radius_km: Option<f64>,
    /// Radius for the urban density count (default 3.0).
    #[arg(long = ARG_URBAN_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) urban_radius_km: Option<f64>,
    /// Minimum urban index labelled `Urban` (default 20).
    #[arg(long = ARG_URBAN_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) urban_threshold: Option<usize>,
    /// Minimum urban index labelled `Suburban` (default 10).
    #[arg(long = ARG_SUBURBAN_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) suburban_threshold: Option<usize>,
    /// Path to a JSON file of `walking` and `driving` target overrides.
    #[arg(long = ARG_TARGETS, value_name = "path")]
    #[serde(default)]
    pub(crate) targets: Option<Utf8PathBuf>,
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
    /// Path to the amenities JSON file.
    pub(crate) amenities_path: Utf8PathBuf,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    /// Optional path to the target overrides file.
    pub(crate) targets_path: Option<Utf8PathBuf>,
    /// Radii and thresholds; target tables are filled in from `targets_path`.
    pub(crate) options: ScoringOptions,
}

impl ScoreConfig {
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        Self::require_in_range(ARG_LAT, self.lat, 90.0)?;
        Self::require_in_range(ARG_LNG, self.lng, 180.0)?;
        self.options.validate()?;
        Ok(())
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.amenities_path, ARG_AMENITIES)?;
        if let Some(targets) = &self.targets_path {
            Self::require_existing(targets, ARG_TARGETS)?;
        }
        Ok(())
    }

    fn require_in_range(field: &'static str, value: f64, bound: f64) -> Result<(), CliError> {
        if (-bound..=bound).contains(&value) {
            Ok(())
        } else {
            Err(CliError::InvalidCoordinate {
                field,
                value,
                min: -bound,
                max: bound,
            })
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match livability_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let amenities_path = args.amenities_path.ok_or(CliError::MissingPositional {
            field: ARG_AMENITIES,
            env: ENV_AMENITIES,
        })?;
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_LNG,
        })?;

        let defaults = ScoringOptions::default();
        let options = ScoringOptions {
            walking_radius_km: args.walking_radius_km.unwrap_or(defaults.walking_radius_km),
            driving_radius_km: args.driving_radius_km.unwrap_or(defaults.driving_radius_km),
            urban_radius_km: args.urban_radius_km.unwrap_or(defaults.urban_radius_km),
            urban_threshold: args.urban_threshold.unwrap_or(defaults.urban_threshold),
            suburban_threshold: args
                .suburban_threshold
                .unwrap_or(defaults.suburban_threshold),
            ..defaults
        };

        Ok(Self {
            amenities_path,
            lat,
            lng,
            targets_path: args.targets,
            options,
        })
    }
}

/// Amenity files hold either a bare array or an `{"amenities": [...]}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmenityDocument {
    Listed(Vec<Amenity>),
    Wrapped { amenities: Vec<Amenity> },
}

impl From<AmenityDocument> for Vec<Amenity> {
    fn from(document: AmenityDocument) -> Self {
        match document {
            AmenityDocument::Listed(amenities) | AmenityDocument::Wrapped { amenities } => {
                amenities
            }
        }
    }
}

/// Per-mode target overrides layered over the default tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TargetOverrides {
    #[serde(default)]
    pub(crate) walking: BTreeMap<AmenityCategory, u32>,
    #[serde(default)]
    pub(crate) driving: BTreeMap<AmenityCategory, u32>,
}

impl TargetOverrides {
    /// Apply the overrides to `options`, leaving untouched modes on defaults.
    pub(crate) fn apply(&self, options: ScoringOptions) -> ScoringOptions {
        [
            (TravelMode::Walking, &self.walking),
            (TravelMode::Driving, &self.driving),
        ]
        .into_iter()
        .filter(|(_, overrides)| !overrides.is_empty())
        .fold(options, |options, (mode, overrides)| {
            let targets = options.targets_for(mode).into_owned().overlay(overrides);
            options.with_targets(mode, targets)
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let result = execute_score(&config)?;
    write_json(writer, &result)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreResult, CliError> {
    let amenities = load_amenities(&config.amenities_path)?;
    let options = match &config.targets_path {
        Some(path) => load_target_overrides(path)?.apply(config.options.clone()),
        None => config.options.clone(),
    };
    info!(
        "scoring {} amenities from {} around ({}, {})",
        amenities.len(),
        config.amenities_path,
        config.lat,
        config.lng
    );
    let result = compute_scores(&amenities, config.lat, config.lng, &options);
    debug!(
        "walking {} driving {} urban index {} ({})",
        result.walking_score, result.driving_score, result.urban_index, result.urban_label
    );
    Ok(result)
}

/// Loads a JSON amenity list from disk.
pub(crate) fn load_amenities(path: &Utf8Path) -> Result<Vec<Amenity>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_AMENITIES,
        path: path.to_path_buf(),
        source,
    })?;
    let document: AmenityDocument = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseAmenities {
            path: path.to_path_buf(),
            source,
        },
    )?;
    Ok(document.into())
}

/// Loads per-mode target overrides from disk.
pub(crate) fn load_target_overrides(path: &Utf8Path) -> Result<TargetOverrides, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_TARGETS,
        path: path.to_path_buf(),
        source,
    })?;
    let overrides: TargetOverrides =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseTargets {
                path: path.to_path_buf(),
                source,
            }
        })?;
    debug!(
        "loaded {} walking and {} driving target overrides from {path}",
        overrides.walking.len(),
        overrides.driving.len()
    );
    Ok(overrides)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

//! Command-line interface for scoring locations from amenity exports.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod categories;
mod error;
mod score;

pub use error::CliError;

use categories::run_categories;
use score::{ScoreArgs, run_score};

pub(crate) const ARG_AMENITIES: &str = "amenities";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_TARGETS: &str = "targets";
pub(crate) const ENV_AMENITIES: &str = "LIVABILITY_CMDS_SCORE_AMENITIES_PATH";
pub(crate) const ENV_LAT: &str = "LIVABILITY_CMDS_SCORE_LAT";
pub(crate) const ENV_LNG: &str = "LIVABILITY_CMDS_SCORE_LNG";

/// Run the livability CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, input
/// loading or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Categories => run_categories(),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "livability",
    about = "Walking, driving and urban density scores for a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a location against a JSON export of nearby amenities.
    Score(ScoreArgs),
    /// Print the amenity category registry with default targets.
    Categories,
}

#[cfg(test)]
mod tests;

//! Command-line interface for ranking balcony plants.
//!
//! Two subcommands are provided:
//! - `recommend` reads a JSON request describing a balcony and, optionally,
//!   the current temperature and humidity, then prints the ranked catalog;
//! - `catalog` validates a catalog and lists its entries.
//!
//! Options layer CLI flags over environment variables and configuration files
//! via `ortho_config`, using the `BALCONY` prefix.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod catalog;
mod error;
mod fs;
mod recommend;

pub use error::CliError;

use catalog::CatalogArgs;
use recommend::RecommendArgs;

const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_CARE_LEVEL: &str = "care-level";
const ARG_MIN_SCORE: &str = "min-score";
const ARG_LIMIT: &str = "limit";
const ENV_REQUEST: &str = "BALCONY_CMDS_RECOMMEND_REQUEST_PATH";

/// Run the balcony CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or output
/// fail. Help and version requests surface as
/// [`CliError::ArgumentParsing`].
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Catalog(args) => catalog::run_catalog(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "balcony",
    about = "Rank container plants for a balcony's space, sun and climate",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every catalog plant against a balcony and print the ranking.
    Recommend(RecommendArgs),
    /// Validate a plant catalog and list its entries.
    Catalog(CatalogArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

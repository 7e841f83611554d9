//! `recommend` command implementation.

use std::io::{BufReader, Write};

use balcony_core::{
    BalconyDimensions, CareLevel, EnvironmentError, EnvironmentProvider, EnvironmentReading,
    FloorMaterial, Orientation, RecommendationFilter, Recommender, SpaceDescriptor, SpaceError,
    reading_or_default,
};
use balcony_scorer::FitnessScorer;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::fs::{open_utf8_file, require_existing};
use crate::{
    ARG_CARE_LEVEL, ARG_CATALOG, ARG_LIMIT, ARG_MIN_SCORE, ARG_REQUEST, CliError, ENV_REQUEST,
    write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every catalog plant against the balcony described in \
                 a JSON request and print the ranking as JSON. The request \
                 may include the current temperature and humidity; without \
                 them a mild default reading is used.",
    about = "Rank plants for a balcony"
)]
#[ortho_config(prefix = "BALCONY")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file describing the balcony.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog used instead of the built-in plants.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Only show plants with this care level (easy, moderate, challenging).
    #[arg(long = ARG_CARE_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) care_level: Option<CareLevel>,
    /// Only show plants scoring at least this much overall.
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<u8>,
    /// Show at most this many plants.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Custom catalog path; the built-in catalog when absent.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Post-ranking filter built from the display options.
    pub(crate) filter: RecommendationFilter,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let filter = RecommendationFilter {
            care_level: args.care_level,
            min_score: args.min_score,
            limit: args.limit,
        };
        Ok(Self {
            request_path,
            catalog: args.catalog,
            filter,
        })
    }
}

/// JSON payload accepted by `recommend`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RecommendRequest {
    /// Balcony measurements and exposure.
    pub(crate) space: SpaceInput,
    /// Current conditions; the default reading is used when absent.
    #[serde(default)]
    pub(crate) environment: Option<EnvironmentReading>,
}

/// Balcony measurements as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct SpaceInput {
    pub(crate) length: f64,
    pub(crate) width: f64,
    pub(crate) railing_height: f64,
    pub(crate) orientation: Orientation,
    pub(crate) peak_sun_hours: f64,
    pub(crate) floor_material: FloorMaterial,
}

impl SpaceInput {
    /// Validate the measurements and derive the floor area.
    pub(crate) fn to_descriptor(self) -> Result<SpaceDescriptor, SpaceError> {
        let dimensions = BalconyDimensions {
            length: self.length,
            width: self.width,
            railing_height: self.railing_height,
        };
        SpaceDescriptor::from_dimensions(
            dimensions,
            self.orientation,
            self.peak_sun_hours,
            self.floor_material,
        )
    }
}

/// Environment source backed by the optional reading in a request.
struct RequestEnvironment(Option<EnvironmentReading>);

impl EnvironmentProvider for RequestEnvironment {
    fn current_reading(&self) -> Result<EnvironmentReading, EnvironmentError> {
        self.0.ok_or_else(|| EnvironmentError::Unavailable {
            reason: String::from("request has no environment reading"),
        })
    }
}

impl RecommendRequest {
    /// Reading to score against, falling back to the default.
    pub(crate) fn environment(&self) -> EnvironmentReading {
        reading_or_default(&RequestEnvironment(self.environment))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let recommender = FitnessScorer::default();
    run_recommend_with(args, &recommender, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    recommender: &dyn Recommender,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let request = load_recommend_request(&config.request_path)?;
    let space = request
        .space
        .to_descriptor()
        .map_err(|source| CliError::InvalidSpace {
            path: config.request_path.clone(),
            source,
        })?;
    let environment = request.environment();
    let catalog = load_catalog(config.catalog.as_deref())?;

    let ranked = recommender.recommend(&space, &environment, catalog.as_slice())?;
    let shown = config.filter.apply(ranked);
    log::debug!("showing {} of {} plants", shown.len(), catalog.len());
    write_json(writer, &shown)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`RecommendRequest`] from disk.
pub(super) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}

//! `catalog` command implementation and catalog loading.

use std::borrow::Cow;
use std::io::{BufReader, Write};

use balcony_catalog::PlantCatalog;
use balcony_core::PlantCategory;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{open_utf8_file, require_existing};
use crate::{ARG_CATALOG, CliError, write_json};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Validate a plant catalog and list each entry's id, common \
                 name and category. Without --catalog the built-in catalog \
                 is listed.",
    about = "List catalog plants"
)]
#[ortho_config(prefix = "BALCONY")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON catalog used instead of the built-in plants.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// One line of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry<'c> {
    id: &'c str,
    common_name: &'c str,
    category: PlantCategory,
}

pub(super) fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_catalog_with(args, &mut stdout)
}

pub(super) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(merged.catalog.as_deref())?;
    let entries: Vec<CatalogEntry<'_>> = catalog
        .iter()
        .map(|plant| CatalogEntry {
            id: &plant.id,
            common_name: &plant.common_name,
            category: plant.category,
        })
        .collect();
    write_json(writer, &entries)
}

/// Load the catalog at `path`, or borrow the built-in one.
pub(crate) fn load_catalog(
    catalog_path: Option<&Utf8Path>,
) -> Result<Cow<'static, PlantCatalog>, CliError> {
    let Some(path) = catalog_path else {
        return Ok(Cow::Borrowed(PlantCatalog::builtin()));
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = PlantCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {} plants from {path}", catalog.len());
    Ok(Cow::Owned(catalog))
}

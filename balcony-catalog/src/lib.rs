//! Read-only plant catalogs for the recommendation engine.
//!
//! A [`PlantCatalog`] is assembled once, validated, and then only read. The
//! engine never owns catalog entries: recommendations borrow them. Two
//! sources are supported:
//! - the built-in seven-entry catalog via [`PlantCatalog::builtin`], created
//!   lazily on first use and shared for the life of the process;
//! - JSON arrays of profiles via [`PlantCatalog::from_json_reader`], using the
//!   camelCase field names of the profile schema.
//!
//! # Examples
//!
//! ```
//! use balcony_catalog::PlantCatalog;
//!
//! let catalog = PlantCatalog::builtin();
//! assert_eq!(catalog.len(), 7);
//! assert!(catalog.get("basil").is_some());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::io::Read;
use std::sync::LazyLock;

use balcony_core::PlantProfile;

mod builtin;
mod error;
mod validate;

pub use error::CatalogError;

static BUILTIN: LazyLock<PlantCatalog> = LazyLock::new(|| PlantCatalog {
    plants: builtin::profiles(),
});

/// Ordered, validated collection of plant profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantCatalog {
    plants: Vec<PlantProfile>,
}

impl PlantCatalog {
    /// Validate `plants` and wrap them, preserving their order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for the first entry with an empty or repeated
    /// id, a non-finite number, a non-positive minimum area, or an inverted
    /// range.
    pub fn new(plants: Vec<PlantProfile>) -> Result<Self, CatalogError> {
        Self::validate(&plants).inspect_err(|err| {
            log::warn!("rejecting plant catalog: {err}");
        })?;
        Ok(Self { plants })
    }

    /// Check profiles without building a catalog.
    ///
    /// Entries are checked in order and the first failure is returned: blank
    /// id, repeated id, non-finite number, non-positive minimum area, then
    /// the sun, temperature and humidity ranges.
    ///
    /// # Errors
    /// Returns the [`CatalogError`] describing the first invalid entry.
    pub fn validate(profiles: &[PlantProfile]) -> Result<(), CatalogError> {
        validate::validate_profiles(profiles)
    }

    /// The catalog shipped with the engine.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse and validate a JSON array of profiles.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the JSON is malformed or does not
    /// match the profile schema, and any validation error from
    /// [`PlantCatalog::new`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let plants: Vec<PlantProfile> =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse { source })?;
        Self::new(plants)
    }

    /// Parse and validate a JSON string.
    ///
    /// # Errors
    /// See [`PlantCatalog::from_json_reader`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Look up a profile by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlantProfile> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Profiles in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[PlantProfile] {
        &self.plants
    }

    /// Iterate over profiles in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlantProfile> {
        self.plants.iter()
    }

    /// Return the number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Report whether the catalog has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl AsRef<[PlantProfile]> for PlantCatalog {
    fn as_ref(&self) -> &[PlantProfile] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a PlantCatalog {
    type Item = &'a PlantProfile;
    type IntoIter = std::slice::Iter<'a, PlantProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

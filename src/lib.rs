//! Facade crate for the balcony plant recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the built-in
//! catalog and the fitness scorer behind feature flags.
//!
//! ```
//! # #[cfg(all(feature = "catalog", feature = "scorer"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use balcony_engine::{
//!     BalconyDimensions, EnvironmentReading, FloorMaterial, Orientation, PlantCatalog,
//!     SpaceDescriptor, score_all,
//! };
//!
//! let space = SpaceDescriptor::from_dimensions(
//!     BalconyDimensions { length: 4.0, width: 2.5, railing_height: 1.1 },
//!     Orientation::South,
//!     6.0,
//!     FloorMaterial::Tile,
//! )?;
//! let ranked = score_all(&space, &EnvironmentReading::default(), PlantCatalog::builtin().as_slice())?;
//! assert_eq!(ranked.len(), 7);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "catalog", feature = "scorer")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use balcony_core::{
    BalconyDimensions, CareLevel, EnvironmentError, EnvironmentProvider, EnvironmentReading,
    FixedEnvironment, FloorMaterial, Orientation, PlantCategory, PlantProfile, RecommendError,
    RecommendationFilter, Recommender, ScoredRecommendation, SpaceDescriptor, SpaceError, Tip,
    Warning, reading_or_default,
};

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use balcony_core::test_support;

#[cfg(feature = "catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "catalog")))]
pub use balcony_catalog::{CatalogError, PlantCatalog};

#[cfg(feature = "scorer")]
#[cfg_attr(docsrs, doc(cfg(feature = "scorer")))]
pub use balcony_scorer::{FitnessScorer, ScoreWeights, WeightsError, score_all};

//! Core domain types for the balcony plant recommendation engine.
//!
//! The crate describes the inputs (a balcony [`SpaceDescriptor`] and an
//! [`EnvironmentReading`]), the read-only [`PlantProfile`] catalog entries, and
//! the [`ScoredRecommendation`] values produced by a [`Recommender`].
//! Constructors that accept user input return `Result` to surface invalid
//! values early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod environment;
mod filter;
mod keyword;
mod plant;
mod recommendation;
mod space;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use environment::{
    DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C, EnvironmentError, EnvironmentProvider,
    EnvironmentReading, FixedEnvironment, reading_or_default,
};
pub use filter::RecommendationFilter;
pub use keyword::{
    CareLevel, FloorMaterial, GrowthRate, LightType, Orientation, PlantCategory, Season, SoilType,
    WaterNeeds,
};
pub use plant::{
    CareProfile, ClimateTolerance, ContainerSuitability, GrowthProfile, HumidityRange,
    PlantProfile, SpaceRequirements, SunlightNeeds,
};
pub use recommendation::{
    DISPLAY_SCORE_CAP, RecommendError, Recommender, ScoredRecommendation, Tip, Warning,
};
pub use space::{BalconyDimensions, MAX_PEAK_SUN_HOURS, SpaceDescriptor, SpaceError};

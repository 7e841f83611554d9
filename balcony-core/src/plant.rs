//! Plant profiles making up the recommendation catalog.
//!
//! Profiles are authored data. They are loaded once and only ever read; the
//! `min <= max` invariants on the numeric ranges are checked when a catalog is
//! assembled, not here.

use crate::{
    CareLevel, GrowthRate, LightType, Orientation, PlantCategory, Season, SoilType, WaterNeeds,
};

/// One entry in the plant catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlantProfile {
    /// Unique key within a catalog.
    pub id: String,
    /// Everyday name, used in reasoning text.
    pub common_name: String,
    /// Botanical name.
    pub scientific_name: String,
    /// Horticultural grouping.
    pub category: PlantCategory,
    /// Floor and container space required.
    pub space: SpaceRequirements,
    /// Direct sun requirements.
    pub sunlight: SunlightNeeds,
    /// Temperature and humidity tolerance.
    pub climate: ClimateTolerance,
    /// Size and flowering at maturity.
    pub growth: GrowthProfile,
    /// Fitness for container growing.
    pub container: ContainerSuitability,
    /// Care metadata shown alongside recommendations.
    pub care: CareProfile,
}

/// Space a plant occupies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SpaceRequirements {
    /// Minimum floor area in square metres.
    pub min_area: f64,
    /// Maximum mature height in metres.
    pub max_height: f64,
    /// Spread at maturity in metres.
    pub spread_width: f64,
    /// Minimum container volume in litres.
    pub min_container_volume: f64,
}

/// Daily direct sun a plant needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SunlightNeeds {
    /// Fewest hours of direct sun tolerated.
    pub min_hours: f64,
    /// Most hours of direct sun tolerated.
    pub max_hours: f64,
    /// Light regime classification.
    pub light_type: LightType,
    /// Orientations that earn a placement bonus. May be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub best_orientation: Vec<Orientation>,
}

impl SunlightNeeds {
    /// Midpoint of the tolerated sun range.
    #[must_use]
    pub const fn ideal_hours(&self) -> f64 {
        f64::midpoint(self.min_hours, self.max_hours)
    }

    /// Report whether `orientation` is one of the preferred orientations.
    #[must_use]
    pub fn prefers(&self, orientation: Orientation) -> bool {
        self.best_orientation.contains(&orientation)
    }
}

/// Temperature and humidity a plant survives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ClimateTolerance {
    /// Lowest survivable temperature in °C.
    pub min_temp: f64,
    /// Highest survivable temperature in °C.
    pub max_temp: f64,
    /// Comfortable relative humidity band.
    pub humidity_range: HumidityRange,
    /// Copes with irregular watering.
    pub drought_tolerant: bool,
    /// Copes with exposed, windy positions.
    pub wind_tolerant: bool,
}

impl ClimateTolerance {
    /// Report whether `temperature` lies inside `min_temp..=max_temp`.
    #[must_use]
    pub fn tolerates_temperature(&self, temperature: f64) -> bool {
        (self.min_temp..=self.max_temp).contains(&temperature)
    }
}

/// Inclusive relative humidity band in percent.
///
/// Serialised as a two-element `[min, max]` array.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct HumidityRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl HumidityRange {
    /// Construct a band from its bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Report whether `humidity` lies inside the band.
    #[must_use]
    pub fn contains(&self, humidity: f64) -> bool {
        (self.min..=self.max).contains(&humidity)
    }
}

impl From<[f64; 2]> for HumidityRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<HumidityRange> for [f64; 2] {
    fn from(range: HumidityRange) -> Self {
        [range.min, range.max]
    }
}

/// Size and flowering at maturity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GrowthProfile {
    /// Height at maturity in metres.
    pub mature_height: f64,
    /// Width at maturity in metres.
    pub mature_width: f64,
    /// How quickly maturity is reached.
    pub growth_rate: GrowthRate,
    /// Flowering seasons; empty for plants grown for foliage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bloom_season: Vec<Season>,
    /// Flower colours; empty for plants grown for foliage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bloom_colors: Vec<String>,
}

/// Fitness for container growing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContainerSuitability {
    /// Grows well in a pot at all.
    pub suitable: bool,
    /// Smallest practical pot in litres.
    pub min_pot_size: f64,
    /// Needs a stake or trellis.
    pub needs_staking: bool,
    /// Spreads sideways beyond its pot.
    pub spreading: bool,
}

/// Care metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CareProfile {
    /// Difficulty rating.
    pub care_level: CareLevel,
    /// Watering demand.
    pub water_needs: WaterNeeds,
    /// Preferred growing medium.
    pub soil_type: SoilType,
}

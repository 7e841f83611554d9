//! Scored recommendations and the trait that produces them.

use std::fmt;

use thiserror::Error;

use crate::{EnvironmentReading, PlantProfile, SpaceDescriptor};

/// Score shown to users once the orientation bonus is capped.
pub const DISPLAY_SCORE_CAP: u8 = 100;

/// A catalog entry scored against one space and reading.
///
/// The profile is borrowed from the catalog; recommendations are rebuilt on
/// every call and never cached.
///
/// Serialises with camelCase keys and an extra `displayScore` entry holding
/// [`ScoredRecommendation::display_score`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecommendation<'c> {
    /// The scored catalog entry.
    pub plant: &'c PlantProfile,
    /// Weighted blend of the three sub-scores. Can exceed 100 when the
    /// orientation bonus applies.
    pub overall_score: u8,
    /// Fit between plant size and floor area.
    pub space_score: u8,
    /// Fit between sun needs and peak sun hours, including any orientation
    /// bonus.
    pub sun_score: u8,
    /// Fit between climate tolerance and the current reading.
    pub climate_score: u8,
    /// Human-readable summary of the three sub-scores.
    pub reasoning: String,
    /// Incompatibilities, in detection order.
    pub warnings: Vec<Warning>,
    /// Cultivation advice, in a fixed order.
    pub tips: Vec<Tip>,
}

impl ScoredRecommendation<'_> {
    /// Overall score capped at [`DISPLAY_SCORE_CAP`].
    ///
    /// `overall_score` is kept unclamped so callers can tell a bonus-assisted
    /// match apart; use this value for progress bars and badges.
    #[must_use]
    pub fn display_score(&self) -> u8 {
        self.overall_score.min(DISPLAY_SCORE_CAP)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoredRecommendation<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ScoredRecommendation", 9)?;
        state.serialize_field("plant", self.plant)?;
        state.serialize_field("overallScore", &self.overall_score)?;
        state.serialize_field("displayScore", &self.display_score())?;
        state.serialize_field("spaceScore", &self.space_score)?;
        state.serialize_field("sunScore", &self.sun_score)?;
        state.serialize_field("climateScore", &self.climate_score)?;
        state.serialize_field("reasoning", &self.reasoning)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("tips", &self.tips)?;
        state.end()
    }
}

/// Renders a measurement with at most two decimals and no trailing zeros.
struct Measure(f64);

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.2}", self.0);
        if text.contains('.') {
            f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
        } else {
            f.write_str(&text)
        }
    }
}

/// An incompatibility between a plant and the space or climate.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The floor area is below the plant's minimum.
    OutgrowsSpace {
        /// Plant minimum in square metres.
        required_area: f64,
        /// Available floor area in square metres.
        available_area: f64,
    },
    /// Peak sun hours are below the plant's minimum.
    InsufficientLight {
        /// Plant minimum hours of direct sun.
        required_hours: f64,
        /// Hours the space receives.
        available_hours: f64,
    },
    /// Temperature is below the plant's minimum.
    TooCold {
        /// Plant minimum in °C.
        min_temp: f64,
    },
    /// Temperature is above the plant's maximum.
    TooHot {
        /// Plant maximum in °C.
        max_temp: f64,
    },
    /// The plant is not wind tolerant and the balcony faces west.
    WindExposure,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutgrowsSpace {
                required_area,
                available_area,
            } => write!(
                f,
                "May outgrow this space: needs at least {} m² but only {} m² is available",
                Measure(required_area),
                Measure(available_area)
            ),
            Self::InsufficientLight {
                required_hours,
                available_hours,
            } => write!(
                f,
                "Not enough light: needs at least {} hours of direct sun, this space gets {}",
                Measure(required_hours),
                Measure(available_hours)
            ),
            Self::TooCold { min_temp } => write!(
                f,
                "Too cold: needs temperatures of at least {}°C",
                Measure(min_temp)
            ),
            Self::TooHot { max_temp } => write!(
                f,
                "Too hot: tolerates temperatures up to {}°C",
                Measure(max_temp)
            ),
            Self::WindExposure => f.write_str(
                "Wind exposure: west-facing balconies catch strong afternoon gusts; add a windbreak",
            ),
        }
    }
}

/// Cultivation advice attached to a recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum Tip {
    /// Recommend a minimum pot size.
    PotSize {
        /// Smallest practical pot in litres.
        min_litres: f64,
    },
    /// Provide a trellis or stake.
    Staking,
    /// Check soil moisture every day.
    DailyMoistureCheck,
    /// Let the soil dry between waterings.
    DroughtTolerant,
    /// Forgiving plant for first-time growers.
    BeginnerFriendly,
    /// Use a free-draining potting mix.
    PottingMix,
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PotSize { min_litres } => {
                write!(f, "Use a pot of at least {} litres", Measure(min_litres))
            }
            Self::Staking => f.write_str("Provide a trellis or stake as it grows"),
            Self::DailyMoistureCheck => {
                f.write_str("Check soil moisture daily; it should never dry out completely")
            }
            Self::DroughtTolerant => {
                f.write_str("Drought tolerant: let the top of the soil dry between waterings")
            }
            Self::BeginnerFriendly => f.write_str("Beginner friendly and forgiving of mistakes"),
            Self::PottingMix => f.write_str("Use a well-draining potting mix"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Warning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tip {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// An input would make a score non-finite.
    #[error("invalid input: {field} must be {expected}, got {value}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// Description of the accepted domain.
        expected: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
}

/// Rank a catalog for a balcony.
///
/// Implementations return one recommendation per catalog entry, sorted by
/// `overall_score` descending with ties kept in catalog order. An empty
/// catalog yields an empty list. Recommenders must be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use balcony_core::{
///     EnvironmentReading, PlantProfile, RecommendError, Recommender, ScoredRecommendation,
///     SpaceDescriptor,
/// };
///
/// struct Unranked;
///
/// impl Recommender for Unranked {
///     fn recommend<'c>(
///         &self,
///         _space: &SpaceDescriptor,
///         _environment: &EnvironmentReading,
///         catalog: &'c [PlantProfile],
///     ) -> Result<Vec<ScoredRecommendation<'c>>, RecommendError> {
///         Ok(catalog
///             .iter()
///             .map(|plant| ScoredRecommendation {
///                 plant,
///                 overall_score: 0,
///                 space_score: 0,
///                 sun_score: 0,
///                 climate_score: 0,
///                 reasoning: String::new(),
///                 warnings: Vec::new(),
///                 tips: Vec::new(),
///             })
///             .collect())
///     }
/// }
/// ```
pub trait Recommender: Send + Sync {
    /// Score and rank every entry of `catalog`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidInput`] when the floor area is not
    /// strictly positive or any reading is not finite.
    fn recommend<'c>(
        &self,
        space: &SpaceDescriptor,
        environment: &EnvironmentReading,
        catalog: &'c [PlantProfile],
    ) -> Result<Vec<ScoredRecommendation<'c>>, RecommendError>;
}

//! Fitness scoring for balcony plant recommendations.
//!
//! [`FitnessScorer`] implements [`Recommender`]: for one balcony and one
//! environment reading it scores every catalog entry on space, sun and
//! climate, blends the three with [`ScoreWeights`], attaches warnings, tips
//! and reasoning, and returns the catalog ranked by overall score. The sort is
//! stable, so equal scores keep catalog order.
//!
//! Scoring is pure and stateless. A single scorer can be shared across
//! threads without coordination.
//!
//! # Examples
//!
//! ```
//! use balcony_core::{EnvironmentReading, FloorMaterial, Orientation, SpaceDescriptor};
//! use balcony_scorer::score_all;
//!
//! let space = SpaceDescriptor {
//!     floor_area: 10.0,
//!     railing_height: 1.1,
//!     orientation: Orientation::South,
//!     peak_sun_hours: 6.0,
//!     floor_material: FloorMaterial::Tile,
//! };
//! let ranked = score_all(&space, &EnvironmentReading::default(), &[])?;
//! assert!(ranked.is_empty());
//! # Ok::<(), balcony_core::RecommendError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use balcony_core::{
    EnvironmentReading, PlantProfile, RecommendError, Recommender, ScoredRecommendation,
    SpaceDescriptor,
};

mod advice;
mod subscores;
mod weights;

pub use subscores::{CLEARANCE_HEIGHT_M, ORIENTATION_BONUS};
pub use weights::{ScoreWeights, WeightsError};

/// Recommender scoring plants on space, sun and climate fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessScorer {
    weights: ScoreWeights,
}

impl FitnessScorer {
    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when the weights are unusable.
    pub fn new(weights: ScoreWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used to blend sub-scores.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score a single plant without ranking.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidInput`] under the same conditions as
    /// [`Recommender::recommend`].
    pub fn score_plant<'c>(
        &self,
        plant: &'c PlantProfile,
        space: &SpaceDescriptor,
        environment: &EnvironmentReading,
    ) -> Result<ScoredRecommendation<'c>, RecommendError> {
        validate_inputs(space, environment)?;
        Ok(self.score_validated(plant, space, environment))
    }

    fn score_validated<'c>(
        &self,
        plant: &'c PlantProfile,
        space: &SpaceDescriptor,
        environment: &EnvironmentReading,
    ) -> ScoredRecommendation<'c> {
        let space_score = subscores::space_score(plant, space);
        let sun_score = subscores::sun_score(plant, space);
        let climate_score = subscores::climate_score(plant, environment);
        let overall_score =
            subscores::to_score(self.weights.blend(space_score, sun_score, climate_score));
        log::debug!(
            "scored {}: overall {overall_score} (space {space_score}, sun {sun_score}, climate {climate_score})",
            plant.id
        );

        ScoredRecommendation {
            plant,
            overall_score,
            space_score,
            sun_score,
            climate_score,
            reasoning: advice::reasoning(plant, space_score, sun_score, climate_score),
            warnings: advice::warnings(plant, space, environment),
            tips: advice::tips(plant),
        }
    }
}

impl Recommender for FitnessScorer {
    fn recommend<'c>(
        &self,
        space: &SpaceDescriptor,
        environment: &EnvironmentReading,
        catalog: &'c [PlantProfile],
    ) -> Result<Vec<ScoredRecommendation<'c>>, RecommendError> {
        validate_inputs(space, environment)?;
        let mut ranked: Vec<_> = catalog
            .iter()
            .map(|plant| self.score_validated(plant, space, environment))
            .collect();
        // `sort_by` is stable: equal scores keep catalog order.
        ranked.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
        if let Some(best) = ranked.first() {
            log::debug!(
                "ranked {} plants; best match {} with {}",
                ranked.len(),
                best.plant.id,
                best.overall_score
            );
        }
        Ok(ranked)
    }
}

/// Score and rank `catalog` with the default weights.
///
/// # Errors
/// Returns [`RecommendError::InvalidInput`] when the floor area is not
/// strictly positive or any reading is not finite.
pub fn score_all<'c>(
    space: &SpaceDescriptor,
    environment: &EnvironmentReading,
    catalog: &'c [PlantProfile],
) -> Result<Vec<ScoredRecommendation<'c>>, RecommendError> {
    FitnessScorer::default().recommend(space, environment, catalog)
}

fn validate_inputs(
    space: &SpaceDescriptor,
    environment: &EnvironmentReading,
) -> Result<(), RecommendError> {
    if !space.floor_area.is_finite() || space.floor_area <= 0.0 {
        return Err(RecommendError::InvalidInput {
            field: "floor area",
            expected: "finite and greater than zero",
            value: space.floor_area,
        });
    }
    require_finite("peak sun hours", space.peak_sun_hours)?;
    require_finite("temperature", environment.temperature)?;
    require_finite("humidity", environment.humidity)?;
    Ok(())
}

const fn require_finite(field: &'static str, value: f64) -> Result<(), RecommendError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RecommendError::InvalidInput {
            field,
            expected: "finite",
            value,
        })
    }
}

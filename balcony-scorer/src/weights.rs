//! Relative weighting of the three sub-scores.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when configuring [`ScoreWeights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// Provided weights were unusable.
    #[error("weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,
}

/// Multipliers applied to the space, sun and climate sub-scores.
///
/// The defaults sum to one, so the blend is a plain weighted sum.
///
/// # Examples
/// ```
/// use balcony_scorer::ScoreWeights;
///
/// let weights = ScoreWeights { space: 0.5, sun: 0.5, climate: 0.0 }.validate()?;
/// assert_eq!(weights.blend(80, 60, 0), 70.0);
/// # Ok::<(), balcony_scorer::WeightsError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier for the space sub-score.
    pub space: f64,
    /// Multiplier for the sun sub-score.
    pub sun: f64,
    /// Multiplier for the climate sub-score.
    pub climate: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when any value is negative or
    /// not finite, or the total weight is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::InvalidWeights)
        }
    }

    fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.total() > 0.0
    }

    const fn has_finite_values(self) -> bool {
        self.space.is_finite() && self.sun.is_finite() && self.climate.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.space >= 0.0 && self.sun >= 0.0 && self.climate >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    fn total(self) -> f64 {
        self.space + self.sun + self.climate
    }

    /// Weighted average of the three sub-scores, before rounding.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires weighted averages"
    )]
    #[must_use]
    pub fn blend(self, space: u8, sun: u8, climate: u8) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        let weighted = f64::from(space) * self.space
            + f64::from(sun) * self.sun
            + f64::from(climate) * self.climate;
        weighted / total
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            space: 0.35,
            sun: 0.40,
            climate: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid_and_sum_to_one() {
        let weights = ScoreWeights::default().validate().expect("defaults valid");
        assert_eq!(weights.total(), 1.0);
    }

    #[rstest]
    #[case(ScoreWeights { space: -0.1, sun: 0.5, climate: 0.6 })]
    #[case(ScoreWeights { space: f64::NAN, sun: 0.5, climate: 0.5 })]
    #[case(ScoreWeights { space: 0.0, sun: 0.0, climate: 0.0 })]
    fn rejects_unusable_weights(#[case] weights: ScoreWeights) {
        assert_eq!(weights.validate(), Err(WeightsError::InvalidWeights));
    }

    #[rstest]
    fn default_blend_matches_fixed_formula() {
        let blended = ScoreWeights::default().blend(60, 100, 100);
        assert_eq!(blended, 86.0);
    }

    #[rstest]
    fn blend_normalises_by_total() {
        let weights = ScoreWeights {
            space: 2.0,
            sun: 2.0,
            climate: 0.0,
        };
        assert_eq!(weights.blend(100, 50, 0), 75.0);
    }
}

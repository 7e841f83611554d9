//! Post-ranking filters applied before display.

use crate::{CareLevel, ScoredRecommendation};

/// Narrow a ranked list without reordering it.
///
/// # Examples
/// ```
/// use balcony_core::{CareLevel, RecommendationFilter};
///
/// let filter = RecommendationFilter::default()
///     .with_care_level(CareLevel::Easy)
///     .with_limit(3);
/// assert_eq!(filter.limit, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecommendationFilter {
    /// Keep only plants with this care level.
    pub care_level: Option<CareLevel>,
    /// Keep only recommendations scoring at least this much overall.
    pub min_score: Option<u8>,
    /// Keep at most this many recommendations.
    pub limit: Option<usize>,
}

impl RecommendationFilter {
    /// Restrict results to one care level.
    #[must_use]
    pub const fn with_care_level(mut self, care_level: CareLevel) -> Self {
        self.care_level = Some(care_level);
        self
    }

    /// Drop recommendations below `min_score`.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Truncate results to `limit` entries.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Report whether a single recommendation passes the filter.
    #[must_use]
    pub fn accepts(&self, recommendation: &ScoredRecommendation<'_>) -> bool {
        let care_matches = self
            .care_level
            .is_none_or(|level| recommendation.plant.care.care_level == level);
        let score_matches = self
            .min_score
            .is_none_or(|min| recommendation.overall_score >= min);
        care_matches && score_matches
    }

    /// Filter and truncate a ranked list, keeping its order.
    #[must_use]
    pub fn apply<'c>(
        &self,
        ranked: Vec<ScoredRecommendation<'c>>,
    ) -> Vec<ScoredRecommendation<'c>> {
        let limit = self.limit.unwrap_or(usize::MAX);
        ranked
            .into_iter()
            .filter(|recommendation| self.accepts(recommendation))
            .take(limit)
            .collect()
    }
}

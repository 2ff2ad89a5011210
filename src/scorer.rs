//! Crop recommendation scoring.
//!
//! Each record earns independent boosts for season fit, region fit and
//! historical production. The boosts are summed, never multiplied, and the
//! total is compared against a fixed threshold.

use crate::models::{CropRecord, RecommendationQuery, ScoredRecommendation};
use crate::season::{resolve_season, Season};

/// Bonus for a season match.
pub const SEASON_WEIGHT: u32 = 40;
/// Bonus when the caller's region text contains the record's region.
pub const REGION_WEIGHT: u32 = 40;
/// Production index is divided by this before being added.
pub const PRODUCTION_DIVISOR: u32 = 3;
/// A record is recommended only when its score is strictly greater.
pub const INCLUSION_THRESHOLD: u32 = 60;
/// Highest reachable score (40 + 40 + 100 / 3).
pub const MAX_SCORE: u32 = SEASON_WEIGHT + REGION_WEIGHT + 100 / PRODUCTION_DIVISOR;

/// Season a query is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveSeason {
    /// Season string supplied by the caller, compared verbatim.
    Explicit(String),
    /// Season derived from the month.
    Resolved(Season),
}

impl EffectiveSeason {
    /// Explicit season wins; otherwise the month is resolved.
    pub fn from_query(query: &RecommendationQuery) -> Self {
        match &query.season {
            Some(season) => EffectiveSeason::Explicit(season.clone()),
            None => EffectiveSeason::Resolved(resolve_season(&query.month)),
        }
    }

    pub fn matches(&self, season: Season) -> bool {
        match self {
            EffectiveSeason::Explicit(label) => season.matches_label(label),
            EffectiveSeason::Resolved(resolved) => {
                *resolved != Season::Unknown && *resolved == season
            }
        }
    }

    /// Label echoed back in the `musim` response field.
    pub fn label(&self) -> String {
        match self {
            EffectiveSeason::Explicit(label) => label.clone(),
            EffectiveSeason::Resolved(season) => season.label().to_string(),
        }
    }
}

/// Case-insensitive check that `record_region` appears inside `query_region`.
pub fn region_matches(record_region: &str, query_region: &str) -> bool {
    query_region
        .to_lowercase()
        .contains(&record_region.to_lowercase())
}

/// Scores a single record. Always in `[0, MAX_SCORE]`.
pub fn score_record(record: &CropRecord, season: &EffectiveSeason, region: &str) -> u32 {
    let mut score = 0;

    if season.matches(record.season) {
        score += SEASON_WEIGHT;
    }
    if region_matches(&record.region, region) {
        score += REGION_WEIGHT;
    }
    score += u32::from(record.production_index) / PRODUCTION_DIVISOR;

    score
}

/// Records scoring above the threshold, in dataset order.
pub fn recommend(records: &[CropRecord], query: &RecommendationQuery) -> Vec<ScoredRecommendation> {
    let season = EffectiveSeason::from_query(query);
    recommend_for_season(records, &season, &query.region)
}

/// Same as [`recommend`] with the season already resolved.
pub fn recommend_for_season(
    records: &[CropRecord],
    season: &EffectiveSeason,
    region: &str,
) -> Vec<ScoredRecommendation> {
    let recommendations: Vec<ScoredRecommendation> = records
        .iter()
        .filter_map(|record| {
            let score = score_record(record, season, region);
            tracing::trace!("{} ({}/{}): {}", record.name, record.season, record.region, score);
            (score > INCLUSION_THRESHOLD).then(|| ScoredRecommendation {
                crop_name: record.name.clone(),
                score,
                description: record.description.clone(),
            })
        })
        .collect();

    tracing::debug!(
        "Scored {} records for season={:?} region={:?}: {} recommended",
        records.len(),
        season.label(),
        region,
        recommendations.len()
    );

    recommendations
}

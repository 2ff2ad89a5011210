use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use crate::season::Season;

// ============ Dataset Models ============

/// Highest production index a crop record may carry.
pub const MAX_PRODUCTION_INDEX: u8 = 100;

/// A crop suitable for a given season and region.
///
/// The same crop name may appear several times with different
/// season/region combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CropRecord {
    /// Crop name (e.g. "Padi").
    #[serde(rename = "nama")]
    pub name: String,
    /// Season the crop is suited to.
    #[serde(rename = "musim")]
    pub season: Season,
    /// Region name (e.g. "Utara").
    #[serde(rename = "wilayah")]
    pub region: String,
    /// Historical yield proxy in [0, 100].
    #[serde(rename = "produksi")]
    pub production_index: u8,
    /// Free-text description.
    #[serde(rename = "deskripsi")]
    pub description: String,
}

impl CropRecord {
    /// Builds a record, rejecting values that would break scoring invariants.
    pub fn new(
        name: impl Into<String>,
        season: Season,
        region: impl Into<String>,
        production_index: u8,
        description: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        let region = region.into();

        if name.trim().is_empty() {
            anyhow::bail!("crop name cannot be empty");
        }
        if region.trim().is_empty() {
            anyhow::bail!("region for crop '{}' cannot be empty", name);
        }
        if season == Season::Unknown {
            anyhow::bail!("crop '{}' must have a concrete season", name);
        }
        if production_index > MAX_PRODUCTION_INDEX {
            anyhow::bail!(
                "production index {} for crop '{}' exceeds {}",
                production_index,
                name,
                MAX_PRODUCTION_INDEX
            );
        }

        Ok(Self {
            name,
            season,
            region,
            production_index,
            description: description.into(),
        })
    }
}

/// Region -> crop -> production index, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductionTable(pub BTreeMap<String, BTreeMap<String, u8>>);

impl ProductionTable {
    /// Production index of `crop` in `region`, if recorded.
    pub fn get(&self, region: &str, crop: &str) -> Option<u8> {
        self.0.get(region)?.get(crop).copied()
    }
}

/// Crop with the single highest production figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopProduction {
    pub tanaman: String,
    pub nilai: u8,
}

/// Hand-curated regional summary served by `/analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisSummary {
    pub wilayah_utara: Vec<String>,
    pub wilayah_tengah: Vec<String>,
    pub wilayah_selatan: Vec<String>,
    pub musim_terbaik: String,
    pub produksi_tertinggi: TopProduction,
}

// ============ Request Models ============

/// Query parameters for `GET /recommend`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendParams {
    /// Month name, e.g. "Januari".
    pub month: Option<String>,
    /// Free-text region, e.g. "Jember Utara".
    pub region: Option<String>,
    /// Explicit season; overrides the month when non-empty.
    pub season: Option<String>,
}

/// Query parameters for `GET /care` and `GET /fertilizer`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlantParams {
    /// Crop name, matched case-insensitively.
    pub plant: Option<String>,
}

/// Query parameters for `GET /weather`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherParams {
    /// Month name.
    pub month: Option<String>,
}

/// First value recorded for `key` in a decoded query string.
///
/// Repeated keys keep their first occurrence and every key is read on its
/// own, so one odd parameter never hides the others.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

impl RecommendParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            month: first_value(pairs, "month"),
            region: first_value(pairs, "region"),
            season: first_value(pairs, "season"),
        }
    }
}

impl PlantParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            plant: first_value(pairs, "plant"),
        }
    }
}

impl WeatherParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            month: first_value(pairs, "month"),
        }
    }
}

/// Normalised recommendation request.
///
/// Missing parameters become empty strings and an empty season is treated
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub month: String,
    pub region: String,
    pub season: Option<String>,
}

impl RecommendationQuery {
    pub fn new(
        month: impl Into<String>,
        region: impl Into<String>,
        season: Option<String>,
    ) -> Self {
        Self {
            month: month.into(),
            region: region.into(),
            season: season.filter(|s| !s.is_empty()),
        }
    }
}

impl From<RecommendParams> for RecommendationQuery {
    fn from(params: RecommendParams) -> Self {
        Self::new(
            params.month.unwrap_or_default(),
            params.region.unwrap_or_default(),
            params.season,
        )
    }
}

// ============ Response Models ============

/// A crop that passed the recommendation threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoredRecommendation {
    #[serde(rename = "tanaman")]
    pub crop_name: String,
    #[serde(rename = "skor")]
    pub score: u32,
    #[serde(rename = "deskripsi")]
    pub description: String,
}

/// Response body of `GET /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    pub bulan: String,
    pub musim: String,
    pub wilayah: String,
    pub rekomendasi: Vec<ScoredRecommendation>,
}

/// Response body of `GET /care`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CareTipResponse {
    pub tanaman: String,
    pub panduan: String,
}

/// Response body of `GET /fertilizer`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FertilizerResponse {
    pub tanaman: String,
    pub pupuk: String,
    pub keterangan: String,
}

/// Response body of `GET /weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonSummary {
    pub bulan: String,
    pub musim: Season,
    pub info: String,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}

/// Body returned for a lookup miss.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

//! Direct table lookups backing the informational endpoints.

use crate::dataset::{Dataset, WEATHER_UNAVAILABLE};
use crate::models::{AnalysisSummary, ProductionTable, SeasonSummary};
use crate::season::resolve_season;

/// Lookup key for a crop name: trimmed and lower-cased.
pub fn normalize_crop_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Dataset {
    /// Care tip for a crop, matched case-insensitively.
    pub fn lookup_care_tip(&self, crop_name: &str) -> Option<&str> {
        self.care_tips
            .get(&normalize_crop_name(crop_name))
            .map(String::as_str)
    }

    /// Fertilizer dosage guidance for a crop, matched case-insensitively.
    pub fn lookup_fertilizer(&self, crop_name: &str) -> Option<&str> {
        self.fertilizers
            .get(&normalize_crop_name(crop_name))
            .map(String::as_str)
    }

    pub fn production_table(&self) -> &ProductionTable {
        &self.production
    }

    /// Simulated weather for the season a month falls in.
    ///
    /// Months that do not resolve get a fixed "no data" text rather than an
    /// error.
    pub fn season_summary(&self, month: &str) -> SeasonSummary {
        let month = month.to_lowercase();
        let season = resolve_season(&month);
        let info = self
            .weather
            .get(&season)
            .cloned()
            .unwrap_or_else(|| WEATHER_UNAVAILABLE.to_string());

        SeasonSummary {
            bulan: month,
            musim: season,
            info,
        }
    }

    pub fn analysis(&self) -> &AnalysisSummary {
        &self.analysis
    }
}

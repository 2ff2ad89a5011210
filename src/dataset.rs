//! Built-in agricultural reference data for the Jember regions.
//!
//! Everything here is constructed once at startup and shared read-only.

use std::collections::{BTreeMap, HashMap};

use crate::models::{AnalysisSummary, CropRecord, ProductionTable, TopProduction};
use crate::season::Season;

/// Note attached to every fertilizer recommendation.
pub const FERTILIZER_NOTE: &str = "Rekomendasi dosis berdasarkan rata-rata hasil panen terbaik.";

/// Weather text returned for a month that does not resolve to a season.
pub const WEATHER_UNAVAILABLE: &str = "Data cuaca tidak tersedia untuk bulan tersebut.";

/// Immutable in-memory dataset consulted by the scorer and lookups.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(crate) crops: Vec<CropRecord>,
    pub(crate) production: ProductionTable,
    /// Keyed by lower-cased crop name.
    pub(crate) care_tips: HashMap<String, String>,
    /// Keyed by lower-cased crop name.
    pub(crate) fertilizers: HashMap<String, String>,
    pub(crate) weather: HashMap<Season, String>,
    pub(crate) analysis: AnalysisSummary,
}

impl Dataset {
    /// Assembles a dataset from its parts, lower-casing lookup keys.
    pub fn new(
        crops: Vec<CropRecord>,
        production: ProductionTable,
        care_tips: impl IntoIterator<Item = (String, String)>,
        fertilizers: impl IntoIterator<Item = (String, String)>,
        weather: impl IntoIterator<Item = (Season, String)>,
        analysis: AnalysisSummary,
    ) -> Self {
        Self {
            crops,
            production,
            care_tips: lowercase_keys(care_tips),
            fertilizers: lowercase_keys(fertilizers),
            weather: weather.into_iter().collect(),
            analysis,
        }
    }

    /// The dataset shipped with the service.
    pub fn builtin() -> anyhow::Result<Self> {
        let crops = vec![
            CropRecord::new(
                "Padi",
                Season::Rain,
                "Utara",
                95,
                "Tanaman utama di wilayah utara, cocok di musim hujan dengan curah hujan tinggi.",
            )?,
            CropRecord::new(
                "Kedelai",
                Season::Rain,
                "Utara",
                85,
                "Ditanam setelah padi di musim hujan dengan drainase baik.",
            )?,
            CropRecord::new(
                "Jagung",
                Season::Transition,
                "Tengah",
                90,
                "Tahan terhadap cuaca tidak menentu dan cocok di lahan sedang.",
            )?,
            CropRecord::new(
                "Cabai",
                Season::Transition,
                "Tengah",
                80,
                "Cocok di tanah gembur dengan sinar matahari cukup.",
            )?,
            CropRecord::new(
                "Tembakau",
                Season::Dry,
                "Selatan",
                98,
                "Unggulan Jember bagian selatan pada musim kemarau.",
            )?,
            CropRecord::new(
                "Jagung",
                Season::Dry,
                "Selatan",
                85,
                "Tahan panas dan minim curah hujan.",
            )?,
            CropRecord::new(
                "Padi",
                Season::Transition,
                "Utara",
                80,
                "Masih cocok ditanam di awal musim peralihan.",
            )?,
            CropRecord::new(
                "Kedelai",
                Season::Dry,
                "Utara",
                70,
                "Masih bisa tumbuh di akhir kemarau dengan irigasi cukup.",
            )?,
            CropRecord::new(
                "Cabai",
                Season::Dry,
                "Tengah",
                85,
                "Hasil baik di tanah gembur saat panas tidak ekstrem.",
            )?,
        ];

        let production = production_table([
            ("Utara", &[("Padi", 95), ("Kedelai", 85)][..]),
            ("Tengah", &[("Jagung", 90), ("Cabai", 80)][..]),
            ("Selatan", &[("Tembakau", 98), ("Jagung", 85)][..]),
        ]);

        let care_tips = [
            ("padi", "Gunakan sistem irigasi yang baik dan pupuk organik."),
            ("kedelai", "Tanam di tanah gembur dan hindari genangan air."),
            ("jagung", "Pastikan sinar matahari cukup dan pengairan teratur."),
            ("cabai", "Gunakan mulsa plastik hitam perak untuk menjaga kelembapan."),
            ("tembakau", "Cocok di musim kemarau, hindari curah hujan tinggi."),
        ];

        let fertilizers = [
            ("padi", "Urea 100kg/ha, NPK 150kg/ha, pupuk organik 2 ton/ha"),
            ("kedelai", "NPK 100kg/ha, Pupuk kandang 1 ton/ha"),
            ("jagung", "Urea 120kg/ha, KCl 50kg/ha, NPK 100kg/ha"),
            ("cabai", "Kompos 2 ton/ha, NPK 200kg/ha, dolomit 100kg/ha"),
            ("tembakau", "ZA 100kg/ha, SP36 75kg/ha, pupuk organik 1,5 ton/ha"),
        ];

        let weather = [
            (Season::Rain, "Curah hujan tinggi, suhu 23-28°C, kelembapan 80-90%."),
            (Season::Transition, "Hujan tidak menentu, suhu 26-30°C, kelembapan sedang."),
            (Season::Dry, "Curah hujan rendah, suhu 30-34°C, kelembapan rendah."),
        ];

        let analysis = AnalysisSummary {
            wilayah_utara: strings(&["Padi", "Kedelai"]),
            wilayah_tengah: strings(&["Jagung", "Cabai"]),
            wilayah_selatan: strings(&["Tembakau", "Jagung"]),
            musim_terbaik: format!(
                "{} dan {}",
                Season::Dry.local_label(),
                Season::Transition.local_label()
            ),
            produksi_tertinggi: TopProduction {
                tanaman: "Tembakau".to_string(),
                nilai: 98,
            },
        };

        let dataset = Self::new(
            crops,
            production,
            care_tips.map(|(k, v)| (k.to_string(), v.to_string())),
            fertilizers.map(|(k, v)| (k.to_string(), v.to_string())),
            weather.map(|(s, v)| (s, v.to_string())),
            analysis,
        );

        tracing::debug!(
            "Built-in dataset loaded: {} crop records, {} regions",
            dataset.crops.len(),
            dataset.production.0.len()
        );

        Ok(dataset)
    }

    /// All crop records in dataset order.
    pub fn crops(&self) -> &[CropRecord] {
        &self.crops
    }
}

fn lowercase_keys(entries: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.trim().to_lowercase(), v))
        .collect()
}

fn production_table<'a>(
    regions: impl IntoIterator<Item = (&'a str, &'a [(&'a str, u8)])>,
) -> ProductionTable {
    let table = regions
        .into_iter()
        .map(|(region, crops)| {
            let crops: BTreeMap<String, u8> = crops
                .iter()
                .map(|(crop, index)| (crop.to_string(), *index))
                .collect();
            (region.to_string(), crops)
        })
        .collect();
    ProductionTable(table)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

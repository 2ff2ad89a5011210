use crate::config::Config;
use crate::dataset::{Dataset, FERTILIZER_NOTE};
use crate::errors::AppError;
use crate::lookup::normalize_crop_name;
use crate::models::*;
use crate::scorer::{self, EffectiveSeason};
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Read-only reference data, built once at startup.
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    /// Lookup-miss error honouring the configured not-found mode.
    fn not_found(&self, resource: String) -> AppError {
        AppError::NotFound {
            resource,
            strict: self.config.strict_not_found,
        }
    }
}

/// Health check endpoint.
///
/// Returns the service status, version and current time.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /recommend
///
/// Scores every crop record against the requested month/season and region
/// and returns those above the inclusion threshold, in dataset order.
/// Missing parameters are treated as empty; repeated keys keep their
/// first value.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `query` - Query parameters (`month`, `region`, `season`).
#[utoipa::path(
    get,
    path = "/recommend",
    params(RecommendParams),
    responses((status = 200, description = "Scored crop recommendations", body = RecommendationResponse))
)]
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    query: Option<Query<QueryPairs>>,
) -> Json<RecommendationResponse> {
    let params = RecommendParams::from_pairs(&query_pairs(query));
    tracing::info!("GET /recommend - params: {:?}", params);

    let query = RecommendationQuery::from(params);
    let season = EffectiveSeason::from_query(&query);
    let rekomendasi = scorer::recommend_for_season(state.dataset.crops(), &season, &query.region);

    Json(RecommendationResponse {
        bulan: query.month,
        musim: season.label(),
        wilayah: query.region,
        rekomendasi,
    })
}

/// GET /plants
///
/// Returns every crop record in dataset order.
#[utoipa::path(
    get,
    path = "/plants",
    responses((status = 200, description = "All crop records", body = [CropRecord]))
)]
pub async fn plants(State(state): State<Arc<AppState>>) -> Json<Vec<CropRecord>> {
    tracing::info!("GET /plants");
    Json(state.dataset.crops().to_vec())
}

/// GET /care
///
/// Looks up the care guide for a crop.
///
/// # Returns
///
/// * `Result<Json<CareTipResponse>, AppError>` - The tip, or a not-found error object.
#[utoipa::path(
    get,
    path = "/care",
    params(PlantParams),
    responses(
        (status = 200, description = "Care guide, or an error object on a miss", body = CareTipResponse),
        (status = 404, description = "Unknown crop (strict mode only)", body = ErrorResponse)
    )
)]
pub async fn care(
    State(state): State<Arc<AppState>>,
    query: Option<Query<QueryPairs>>,
) -> Result<Json<CareTipResponse>, AppError> {
    let plant = plant_param(query);
    tracing::info!("GET /care - plant: {:?}", plant);

    let panduan = state
        .dataset
        .lookup_care_tip(&plant)
        .ok_or_else(|| state.not_found(format!("care tip for '{}'", plant)))?;

    Ok(Json(CareTipResponse {
        tanaman: plant,
        panduan: panduan.to_string(),
    }))
}

/// GET /production
///
/// Returns the region -> crop -> production index table.
#[utoipa::path(
    get,
    path = "/production",
    responses((status = 200, description = "Production figures per region", body = ProductionTable))
)]
pub async fn production(State(state): State<Arc<AppState>>) -> Json<ProductionTable> {
    tracing::info!("GET /production");
    Json(state.dataset.production_table().clone())
}

/// GET /fertilizer
///
/// Looks up the fertilizer dosage recommended for a crop.
#[utoipa::path(
    get,
    path = "/fertilizer",
    params(PlantParams),
    responses(
        (status = 200, description = "Fertilizer guidance, or an error object on a miss", body = FertilizerResponse),
        (status = 404, description = "Unknown crop (strict mode only)", body = ErrorResponse)
    )
)]
pub async fn fertilizer(
    State(state): State<Arc<AppState>>,
    query: Option<Query<QueryPairs>>,
) -> Result<Json<FertilizerResponse>, AppError> {
    let plant = plant_param(query);
    tracing::info!("GET /fertilizer - plant: {:?}", plant);

    let pupuk = state
        .dataset
        .lookup_fertilizer(&plant)
        .ok_or_else(|| state.not_found(format!("fertilizer for '{}'", plant)))?;

    Ok(Json(FertilizerResponse {
        tanaman: plant,
        pupuk: pupuk.to_string(),
        keterangan: FERTILIZER_NOTE.to_string(),
    }))
}

/// GET /weather
///
/// Simulated weather for the season the given month falls in.
#[utoipa::path(
    get,
    path = "/weather",
    params(WeatherParams),
    responses((status = 200, description = "Seasonal weather summary", body = SeasonSummary))
)]
pub async fn weather(
    State(state): State<Arc<AppState>>,
    query: Option<Query<QueryPairs>>,
) -> Json<SeasonSummary> {
    let month = WeatherParams::from_pairs(&query_pairs(query))
        .month
        .unwrap_or_default();
    tracing::info!("GET /weather - month: {:?}", month);

    Json(state.dataset.season_summary(&month))
}

/// GET /analysis
///
/// Returns the curated regional analysis summary.
#[utoipa::path(
    get,
    path = "/analysis",
    responses((status = 200, description = "Regional analysis summary", body = AnalysisSummary))
)]
pub async fn analysis(State(state): State<Arc<AppState>>) -> Json<AnalysisSummary> {
    tracing::info!("GET /analysis");
    Json(state.dataset.analysis().clone())
}

/// Raw query string as decoded key/value pairs, in request order.
type QueryPairs = Vec<(String, String)>;

fn query_pairs(query: Option<Query<QueryPairs>>) -> QueryPairs {
    query.map(|Query(pairs)| pairs).unwrap_or_default()
}

/// Normalised `plant` parameter; missing becomes "".
fn plant_param(query: Option<Query<QueryPairs>>) -> String {
    let plant = PlantParams::from_pairs(&query_pairs(query))
        .plant
        .unwrap_or_default();
    normalize_crop_name(&plant)
}

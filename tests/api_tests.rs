/// Router-level tests exercising every endpoint through `tower::ServiceExt::oneshot`
use agri_advisor_api::config::Config;
use agri_advisor_api::dataset::{Dataset, FERTILIZER_NOTE, WEATHER_UNAVAILABLE};
use agri_advisor_api::api::{handlers::AppState, router::create_router};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

/// Helper function to create a test router
fn create_test_app(public_dir: PathBuf, strict_not_found: bool) -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        public_dir,
        strict_not_found,
    };
    let dataset = Dataset::builtin().expect("built-in dataset is valid");
    create_router(Arc::new(AppState::new(config, dataset)))
}

fn default_app() -> Router {
    create_test_app(PathBuf::from("./public-does-not-exist"), false)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[cfg(test)]
mod recommend_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_params_yields_unknown_season_and_empty_list() {
        let (status, body) = get(default_app(), "/recommend").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bulan"], "");
        assert_eq!(body["musim"], "Unknown");
        assert_eq!(body["wilayah"], "");
        assert_eq!(body["rekomendasi"], json!([]));
    }

    #[tokio::test]
    async fn test_januari_jember_utara() {
        let (status, body) = get(default_app(), "/recommend?month=Januari&region=Jember%20Utara").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["musim"], "Rain");
        assert_eq!(body["wilayah"], "Jember Utara");

        let recs = body["rekomendasi"].as_array().unwrap();
        let summary: Vec<(&str, u64)> = recs
            .iter()
            .map(|r| (r["tanaman"].as_str().unwrap(), r["skor"].as_u64().unwrap()))
            .collect();

        // Padi (Rain/Utara/95), Kedelai (Rain/Utara/85), Padi (Transition/Utara/80),
        // Kedelai (Dry/Utara/70) in dataset order
        assert_eq!(
            summary,
            vec![("Padi", 111), ("Kedelai", 108), ("Padi", 66), ("Kedelai", 63)]
        );
    }

    #[tokio::test]
    async fn test_explicit_season_overrides_month() {
        let (_, body) = get(
            default_app(),
            "/recommend?month=Januari&region=Selatan&season=Kemarau",
        )
        .await;

        assert_eq!(body["musim"], "Kemarau");
        let names: Vec<&str> = body["rekomendasi"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["tanaman"].as_str().unwrap())
            .collect();
        // Dry records: Tembakau/Selatan 112, Jagung/Selatan 108,
        // Kedelai/Utara 63, Cabai/Tengah 68
        assert_eq!(names, vec!["Tembakau", "Jagung", "Kedelai", "Cabai"]);
    }

    #[tokio::test]
    async fn test_empty_season_param_falls_back_to_month() {
        let (_, body) = get(default_app(), "/recommend?month=juli&season=").await;
        assert_eq!(body["musim"], "Dry");
    }

    #[tokio::test]
    async fn test_repeated_region_keeps_first_value() {
        let (status, body) = get(
            default_app(),
            "/recommend?month=Januari&region=Utara&region=Tengah",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bulan"], "Januari");
        assert_eq!(body["musim"], "Rain");
        assert_eq!(body["wilayah"], "Utara");

        let summary: Vec<(&str, u64)> = body["rekomendasi"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| (r["tanaman"].as_str().unwrap(), r["skor"].as_u64().unwrap()))
            .collect();
        assert_eq!(
            summary,
            vec![("Padi", 111), ("Kedelai", 108), ("Padi", 66), ("Kedelai", 63)]
        );
    }

    #[tokio::test]
    async fn test_all_scores_above_threshold() {
        let (_, body) = get(default_app(), "/recommend?month=Mei&region=tengah").await;
        let recs = body["rekomendasi"].as_array().unwrap();

        assert!(!recs.is_empty());
        for rec in recs {
            let score = rec["skor"].as_u64().unwrap();
            assert!(score > 60 && score <= 113, "score out of range: {}", score);
        }
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_plants_lists_all_records() {
        let (status, body) = get(default_app(), "/plants").await;

        assert_eq!(status, StatusCode::OK);
        let plants = body.as_array().unwrap();
        assert_eq!(plants.len(), 9);
        assert_eq!(plants[0]["nama"], "Padi");
        assert_eq!(plants[0]["musim"], "Rain");
        assert_eq!(plants[0]["wilayah"], "Utara");
        assert_eq!(plants[0]["produksi"], 95);
    }

    #[tokio::test]
    async fn test_care_found() {
        let (status, body) = get(default_app(), "/care?plant=padi").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "tanaman": "padi",
                "panduan": "Gunakan sistem irigasi yang baik dan pupuk organik."
            })
        );
    }

    #[tokio::test]
    async fn test_care_is_case_insensitive() {
        let (_, body) = get(default_app(), "/care?plant=TEMBAKAU").await;
        assert_eq!(body["tanaman"], "tembakau");
        assert_eq!(
            body["panduan"],
            "Cocok di musim kemarau, hindari curah hujan tinggi."
        );
    }

    #[tokio::test]
    async fn test_care_missing_returns_error_object_with_200() {
        let (status, body) = get(default_app(), "/care?plant=unknown_crop").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_care_missing_strict_mode_returns_404() {
        let app = create_test_app(PathBuf::from("./public-does-not-exist"), true);
        let (status, body) = get(app, "/care?plant=unknown_crop").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_care_without_param() {
        let (status, body) = get(default_app(), "/care").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "not found");
    }

    #[tokio::test]
    async fn test_fertilizer_found() {
        let (status, body) = get(default_app(), "/fertilizer?plant=Cabai").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tanaman"], "cabai");
        assert_eq!(body["pupuk"], "Kompos 2 ton/ha, NPK 200kg/ha, dolomit 100kg/ha");
        assert_eq!(body["keterangan"], FERTILIZER_NOTE);
    }

    #[tokio::test]
    async fn test_fertilizer_missing() {
        let (status, body) = get(default_app(), "/fertilizer?plant=kopi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_fertilizer_missing_strict_mode_returns_404() {
        let app = create_test_app(PathBuf::from("./public-does-not-exist"), true);
        let (status, body) = get(app, "/fertilizer?plant=kopi").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_repeated_plant_keeps_first_value() {
        let (status, body) = get(default_app(), "/care?plant=Padi&plant=kopi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tanaman"], "padi");
    }

    #[tokio::test]
    async fn test_production_is_nested() {
        let (status, body) = get(default_app(), "/production").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Utara"]["Padi"], 95);
        assert_eq!(body["Tengah"]["Jagung"], 90);
        assert_eq!(body["Selatan"]["Tembakau"], 98);
    }

    #[tokio::test]
    async fn test_weather_known_month() {
        let (_, body) = get(default_app(), "/weather?month=Agustus").await;

        assert_eq!(body["bulan"], "agustus");
        assert_eq!(body["musim"], "Dry");
        assert_eq!(
            body["info"],
            "Curah hujan rendah, suhu 30-34°C, kelembapan rendah."
        );
    }

    #[tokio::test]
    async fn test_weather_unknown_month() {
        let (_, body) = get(default_app(), "/weather?month=smarch").await;
        assert_eq!(body["musim"], "Unknown");
        assert_eq!(body["info"], WEATHER_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_analysis_summary() {
        let (_, body) = get(default_app(), "/analysis").await;

        assert_eq!(body["wilayah_utara"], json!(["Padi", "Kedelai"]));
        assert_eq!(body["wilayah_selatan"], json!(["Tembakau", "Jagung"]));
        assert_eq!(
            body["produksi_tertinggi"],
            json!({"tanaman": "Tembakau", "nilai": 98})
        );
        assert_eq!(body["musim_terbaik"], "Kemarau dan Peralihan");
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(default_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "agri-advisor-api");
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (status, body) = get(default_app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/recommend"].is_object());
    }

    #[tokio::test]
    async fn test_non_get_method_rejected() {
        let response = default_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/recommend")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_static_files_served_from_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Dashboard</h1>").unwrap();
        std::fs::write(dir.path().join("script.js"), "console.log('ok');").unwrap();

        let app = create_test_app(dir.path().to_path_buf(), false);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<h1>Dashboard</h1>");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

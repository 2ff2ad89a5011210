use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use utoipa::OpenApi;

use crate::errors::AppError;
use crate::handlers;
use crate::models::{
    AnalysisSummary, CareTipResponse, CropRecord, ErrorResponse, FertilizerResponse,
    HealthResponse, ProductionTable, RecommendationResponse, ScoredRecommendation, SeasonSummary,
    TopProduction,
};
use crate::season::Season;

/// Path the OpenAPI document is served under.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agri Advisor API",
        description = "Read-only crop recommendation, fertilizer and seasonal weather lookups"
    ),
    paths(
        handlers::health,
        handlers::recommend,
        handlers::plants,
        handlers::care,
        handlers::production,
        handlers::fertilizer,
        handlers::weather,
        handlers::analysis,
    ),
    components(schemas(
        Season,
        CropRecord,
        ScoredRecommendation,
        RecommendationResponse,
        CareTipResponse,
        FertilizerResponse,
        SeasonSummary,
        ProductionTable,
        TopProduction,
        AnalysisSummary,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Renders the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, AppError> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}

/// Serves the generated OpenAPI specification.
pub async fn serve_openapi_spec() -> Result<impl IntoResponse, AppError> {
    let content = openapi_json()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        content,
    ))
}

/// Serves the Swagger UI HTML page.
///
/// The page loads its assets from a CDN and points at [`OPENAPI_PATH`].
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Agri Advisor API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body {{ margin: 0; padding: 0; }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: "{spec_url}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            }});
        }};
    </script>
</body>
</html>
"#,
        spec_url = OPENAPI_PATH
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}

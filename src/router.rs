use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{self, AppState};
use crate::openapi;

/// Builds the application router.
///
/// API routes are matched first; every other path falls through to the
/// static front-end directory configured in `state.config.public_dir`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(handlers::health))
        // API Documentation
        .route("/docs", get(openapi::serve_swagger_ui))
        .route(openapi::OPENAPI_PATH, get(openapi::serve_openapi_spec))
        // Lookup endpoints
        .route("/recommend", get(handlers::recommend))
        .route("/plants", get(handlers::plants))
        .route("/care", get(handlers::care))
        .route("/production", get(handlers::production))
        .route("/fertilizer", get(handlers::fertilizer))
        .route("/weather", get(handlers::weather))
        .route("/analysis", get(handlers::analysis))
        .fallback_service(static_files)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

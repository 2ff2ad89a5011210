use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agri_advisor_api::config::Config;
use agri_advisor_api::dataset::Dataset;
use agri_advisor_api::handlers::AppState;
use agri_advisor_api::router::create_router;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the in-memory dataset and
/// starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_advisor_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    if !config.public_dir.is_dir() {
        tracing::warn!(
            "Public directory {} not found; static assets will return 404",
            config.public_dir.display()
        );
    }

    let dataset = Dataset::builtin()?;
    tracing::info!("Dataset ready: {} crop records", dataset.crops().len());

    let addr = config.bind_addr();
    let app_state = Arc::new(AppState::new(config, dataset));
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌾 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

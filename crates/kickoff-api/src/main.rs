//! Kickoff API server entry point.

use std::error::Error;
use std::sync::Arc;

use kickoff_api::config::Config;
use kickoff_api::error::AppError;
use kickoff_api::routes;
use kickoff_api::state::AppState;
use kickoff_core::repository::SelectionRepository;
use kickoff_fixture::infrastructure::static_provider::{FixtureFile, StaticFixtureProvider};
use kickoff_session_store::{InMemorySelectionRepository, PgSelectionRepository};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

async fn selection_repository(config: &Config) -> Result<Arc<dyn SelectionRepository>, AppError> {
    let Some(database_url) = &config.database_url else {
        tracing::info!("DATABASE_URL not set, keeping selections in memory");
        return Ok(Arc::new(InMemorySelectionRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await?;
    let repository = PgSelectionRepository::new(pool);
    repository.migrate().await?;
    tracing::info!("using PostgreSQL selection store");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Kickoff API server");

    let config = Config::from_env()?;

    let fixture_file = FixtureFile::load(&config.fixtures_path)
        .map_err(|e| AppError::Config(format!("FIXTURES_PATH: {e}")))?;
    let fixture_provider = Arc::new(StaticFixtureProvider::from_file(&fixture_file));
    let selection_repository = selection_repository(&config).await?;

    let app_state = AppState::new(
        fixture_provider,
        selection_repository,
        fixture_file.catalogue(),
        config.watched_leagues.clone(),
    );

    // Any origin may call the API; the auth proxy in front sets x-user-id.
    let app = routes::app_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(AppError::from)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    Ok(())
}

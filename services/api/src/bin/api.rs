//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{JsonFileLedger, JsonFilePeriodStore, PgOpinionStore},
    config::Config,
    error::ApiError,
    web::{self, state::AppState, ApiDoc},
};
use axum::Router;
use moviepulse_core::{sentiment::KeywordSentiment, service::VotingService};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    let db_pool = connect_with_retry(&config).await?;
    let opinion_store = Arc::new(PgOpinionStore::new(db_pool));
    info!("Running database migrations...");
    opinion_store.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Initialize the Ledger Adapters & Voting Service ---
    let ledger = Arc::new(JsonFileLedger::new(&config.data_dir));
    let period_store = Arc::new(JsonFilePeriodStore::new(&config.data_dir));
    let voting = VotingService::new(ledger, period_store);

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        opinions: opinion_store,
        voting,
        classifier: Arc::new(KeywordSentiment),
        config: config.clone(),
    });

    // --- 5. Create the Web Router ---
    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(web::router(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Attempts the initial database connection a fixed number of times, at a
/// fixed interval. This is bootstrap-only behaviour: once the pool exists,
/// request-path store failures are never retried. After the final attempt
/// the process terminates with the connection error.
async fn connect_with_retry(config: &Config) -> Result<PgPool, ApiError> {
    let attempts = config.db_connect_attempts;
    for attempt in 1..=attempts {
        info!("Connecting to database (attempt {attempt}/{attempts})...");
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connected successfully.");
                return Ok(pool);
            }
            Err(err) if attempt < attempts => {
                warn!(
                    "Database connection failed: {err}. Retrying in {}s...",
                    config.db_connect_delay.as_secs()
                );
                tokio::time::sleep(config.db_connect_delay).await;
            }
            Err(err) => return Err(err.into()),
        }
    }
    // attempts is validated to be at least 1, so the loop always returns.
    Err(ApiError::Internal("database connection retry loop exhausted".to_string()))
}

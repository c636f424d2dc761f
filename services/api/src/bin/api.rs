//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{GoogleTranslateAdapter, OllamaAnalysisAdapter},
    config::Config,
    error::ApiError,
    web::{build_router, AppState},
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    // One client for both backends so connections are reused; timeouts are
    // applied per request by the adapters.
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("mood-check/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let generator = Arc::new(OllamaAnalysisAdapter::from_config(
        http_client.clone(),
        &config,
    ));
    let translator = Arc::new(GoogleTranslateAdapter::new(
        http_client,
        config.translation_endpoint.clone(),
    ));
    info!(
        model = %config.generation_model,
        endpoint = %config.generation_endpoint,
        source = %config.source_language,
        target = %config.target_language,
        "Enrichment adapters ready."
    );

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState::new(config.clone(), generator, translator));
    let app = build_router(app_state);

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

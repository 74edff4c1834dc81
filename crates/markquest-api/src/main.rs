//! Markquest game server entry point.

use std::error::Error;
use std::sync::Arc;

use markquest_api::app::build_router;
use markquest_api::config::ServerConfig;
use markquest_api::state::AppState;
use markquest_api::telemetry;
use markquest_progress::application::command_handlers::new_game_store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    // Initialize tracing subscriber.
    let tracer_provider = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting Markquest game server");

    // One game per process, created with new-game defaults.
    let app_state = AppState::new(Arc::new(new_game_store()));

    // Build router.
    let app = build_router(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = tracer_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "failed to flush trace exporter");
        }
    }

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

mod config;
mod dto;
mod handlers;
mod interceptors;
mod middleware;
mod models;
mod routes;
mod services;
mod utils;
mod views;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use config::{AppConfig, AppState, LoggingConfig};
use middleware::setup_logging;
use routes::create_router;
use services::HttpEventApi;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utils::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let logging_config = LoggingConfig::from_env()?;
    let _log_guard = setup_logging(&logging_config);

    tracing::info!("Starting application...");

    // Load configuration
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        "Loaded configuration for environment: {} (production: {})",
        app_config.environment,
        app_config.is_production()
    );
    tracing::info!(
        "Event API at {}, registrations at {}, reference offset {}",
        app_config.event_api_base_url,
        app_config.registration_api_base_url,
        app_config.reference_offset
    );

    let api = HttpEventApi::new(&app_config);
    let app_state = AppState::new(app_config.clone(), Arc::new(api), Arc::new(SystemClock));

    let app = create_router(app_state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = app_config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}

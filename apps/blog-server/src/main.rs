//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_server::config::AppConfig;
use blog_server::state::AppState;
use blog_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::from_config(&config);
    let server = blog_server::start(&config, state).await?;

    // Actix stops the server on SIGINT/SIGTERM.
    server.wait().await
}

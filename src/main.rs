use dotenvy::dotenv;
use std::env;

use savy_back_end::api::{self, config::ApiConfig};
use savy_back_end::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env();

    tracing::info!("API configuration loaded successfully");

    // Load AppConfig (database pool and clock)
    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    let router = api::router(app_config, api_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting Savy API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

use dotenvy::dotenv;
use tokio::net::TcpListener;

mod config;
mod error;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flowix_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.ensure_site_dir() {
        tracing::error!("{}. Build the frontend with `trunk build --release` first", e);
        std::process::exit(1);
    }
    tracing::debug!("Serving site from {}", config.site_dir.display());

    let app = routes::router(&config);

    tracing::info!("Starting server on port {}", config.port);
    let listener = match TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind port {}: {}", config.port, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

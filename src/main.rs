//! HTTP server for the Vacation Entitlement Engine.
//!
//! Reads the configuration directory from `VACATION_ENGINE_CONFIG` (default
//! `./config/default`) and listens on `VACATION_ENGINE_ADDR` (default
//! `127.0.0.1:3000`). Log output is controlled with `RUST_LOG`.

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("VACATION_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("VACATION_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "Vacation engine listening");
    if let Err(err) = axum::serve(listener, create_router(AppState::new(config))).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}

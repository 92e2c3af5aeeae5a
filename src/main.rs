//! HTTP server for the compensatory time ledger engine.
//!
//! Environment:
//! - `COMP_LEDGER_CONFIG`: configuration directory (default `./config/default`)
//! - `COMP_LEDGER_ADDR`: bind address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comp_ledger::api::{AppState, create_router};
use comp_ledger::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("COMP_LEDGER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("COMP_LEDGER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        holiday_label = %config.labels().holiday,
        comp_day_minutes = config.rules().comp_day_minutes,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Ledger server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

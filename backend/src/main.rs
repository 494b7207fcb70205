//! Registration validation server entry point.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use registration::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let config = ServerConfig::from_settings(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

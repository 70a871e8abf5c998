use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use home_server::config::AppConfig;
use home_server::entur::EnturClient;
use home_server::lookup::HomeTime;
use home_server::query::{QueryBuilder, resolve_zone};
use home_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .init();

    // Fail at startup rather than on the first request.
    resolve_zone(&config.timezone)?;

    let planner = EnturClient::new(config.entur()).context("failed to create journey planner client")?;
    let builder = QueryBuilder::new(&config.timezone);
    let state = AppState::new(HomeTime::new(builder, planner));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "home-time server listening");
    info!("  POST /        - Trips home for a JSON trip request");
    info!("  POST /home    - Same as POST /");
    info!("  GET  /health  - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

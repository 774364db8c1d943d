//! ToolHub server
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Overrides `TOOLHUB__SERVER__LOG_LEVEL`
//! - `TOOLHUB__SERVER__PORT`: Listen port (default: 5000)
//! - `TOOLHUB__STORAGE__BACKEND`: `file` (default) or `postgres`

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toolhub::adapters::build_tool_handlers;
use toolhub::adapters::http::app_router;
use toolhub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config)?;

    let handlers = build_tool_handlers(&config).await?;
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "ToolHub listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }
    Ok(())
}

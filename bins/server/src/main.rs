//! Livro API Server
//!
//! Main entry point for the Livro bookkeeping service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livro_api::{AppState, create_router};
use livro_core::reports::ReportSettings;
use livro_db::{EntryRepository, connect_with};
use livro_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livro=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let settings = ReportSettings::from(&config.reports);
    info!(
        query_timeout_ms = config.reports.query_timeout_ms,
        monthly_equity = ?config.reports.monthly_equity_accounts,
        cumulative_equity = ?config.reports.cumulative_equity_accounts,
        "Report settings loaded"
    );

    let state = AppState::new(
        Arc::new(EntryRepository::new(db)),
        settings,
        Arc::new(JwtService::new(&config.session)),
        &config.session.login_path,
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

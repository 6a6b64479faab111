mod config;
mod errors;
mod extraction;
mod llm_client;
mod pipeline;
mod roster;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::roster::Roster;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting project-staffer v{}", env!("CARGO_PKG_VERSION"));

    // Load roster (fixed for the life of the process)
    let roster = match &config.roster_path {
        Some(path) => Roster::from_file(path)?,
        None => Roster::builtin(),
    };
    info!("Roster loaded: {} candidates", roster.len());
    if roster.len() < pipeline::allocator::TEAM_SIZE {
        warn!("Roster is smaller than a team; every allocation will use the fallback team");
    }

    // Initialize LLM client
    let llm = GroqClient::new(&config).context("Failed to build completion client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState::new(Arc::new(llm), Arc::new(roster), config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

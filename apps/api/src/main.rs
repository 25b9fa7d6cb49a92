mod config;
mod enrichment;
mod errors;
mod graph;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enrichment::knowledge::StaticCareerKnowledge;
use crate::enrichment::EnrichmentService;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Affinity API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generator transport
    let llm = LlmClient::new(
        config.generator_url.clone(),
        Duration::from_secs(config.generator_timeout_secs),
    )?;
    info!(
        "Generator client initialized (endpoint: {}, model: {})",
        llm.endpoint(),
        config.generator_model
    );

    // Initialize fallback career knowledge (built-ins, plus optional file entries)
    let knowledge = match &config.career_knowledge_path {
        Some(path) => StaticCareerKnowledge::builtin().extend_from_file(path)?,
        None => StaticCareerKnowledge::builtin(),
    };
    info!("Career knowledge loaded: {} entries", knowledge.len());

    let enrichment = EnrichmentService::new(
        Arc::new(llm),
        Arc::new(knowledge),
        config.generator_model.clone(),
    );

    // Build app state
    let state = AppState {
        enrichment: Arc::new(enrichment),
    };

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

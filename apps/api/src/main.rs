mod analysis;
mod config;
mod errors;
mod extraction;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::{SkillMatcher, SkillVocabulary};
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::report::PlainTextReportRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher API v{}", env!("CARGO_PKG_VERSION"));

    // Validate and compile the skill vocabulary; a bad vocabulary stops startup.
    let vocabulary = SkillVocabulary::load(config.skill_vocabulary_path.as_deref())?;
    let matcher = Arc::new(SkillMatcher::new(vocabulary)?);
    info!(
        "Skill matcher compiled ({} phrases)",
        matcher.vocabulary().len()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        matcher,
        extractor: Arc::new(PdfTextExtractor),
        renderer: Arc::new(PlainTextReportRenderer),
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

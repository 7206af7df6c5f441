mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::text_extractor::PdfTextExtractor;
use crate::config::Config;
use crate::extraction::Vocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Match API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary once; the engine only ever reads it
    let vocabulary = match &config.vocabulary_path {
        Some(path) => Vocabulary::from_json_file(path)?,
        None => Vocabulary::builtin()?,
    };
    info!(
        "Skill vocabulary loaded ({} entries, source: {})",
        vocabulary.len(),
        config
            .vocabulary_path
            .as_deref()
            .map_or("built-in".to_string(), |p| p.display().to_string())
    );

    // Prepare the upload directory for temporary résumé files
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory {}",
                config.upload_dir.display()
            )
        })?;
    let text_extractor = Arc::new(PdfTextExtractor::new(config.upload_dir.clone()));
    info!("Uploads stored in {}", config.upload_dir.display());

    // Build app state
    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        text_extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

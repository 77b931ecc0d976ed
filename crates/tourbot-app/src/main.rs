//! TourBot server binary - composition root.
//!
//! Ties the workspace together:
//! 1. Load configuration from TOML (CLI > env > file > defaults)
//! 2. Load the index snapshot built by `tourbot-ingest`
//! 3. Wire the embedding, search, and chat-completion collaborators
//! 4. Start the axum REST API server

use std::sync::Arc;

use clap::Parser;

use tourbot_api::{create_router, AppState};
use tourbot_app::cli::{resolve_data_dir, CliArgs};
use tourbot_chat::ConversationOrchestrator;
use tourbot_core::TourbotConfig;
use tourbot_index::{FlatIndex, HttpEmbeddingService, SemanticSearcher};
use tourbot_llm::GroqClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = TourbotConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting TourBot v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Index snapshot.
    let data_dir = resolve_data_dir(&config.general.data_dir, args.data_dir.as_deref());
    let index_path = data_dir.join("index.json");
    let index = match FlatIndex::load(&index_path) {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!(
                path = %index_path.display(),
                error = %e,
                "No usable index snapshot; starting with an empty corpus. \
                 Run tourbot-ingest to build one."
            );
            FlatIndex::new(config.embedding.dimensions)
        }
    };
    let indexed_passages = index.len();
    tracing::info!(passages = indexed_passages, "Vector index ready");

    // External collaborators.
    let embedder = HttpEmbeddingService::from_config(&config.embedding)?;
    let searcher = Arc::new(SemanticSearcher::new(embedder, Arc::new(index)));
    let model = Arc::new(GroqClient::from_config(&config.llm)?);
    tracing::info!(model = model.model(), "Chat-completion client ready");

    // Conversation pipeline.
    let orchestrator = Arc::new(ConversationOrchestrator::new(
        model,
        searcher,
        &config.retrieval,
        &config.chat,
    ));

    // === API server ===

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, orchestrator, indexed_passages);
    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind; is another instance running?");
            return Err(e.into());
        }
    };

    tracing::info!(addr = %addr, "API server listening");
    axum::serve(listener, router).await?;

    Ok(())
}

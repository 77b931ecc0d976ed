//! Corpus builder binary.
//!
//! Reads pre-fetched travel documents, splits them into overlapping chunks,
//! embeds each chunk, and writes the index snapshot the server loads at
//! startup. Runs offline; the chat server never re-embeds the corpus.

use std::sync::Arc;

use clap::Parser;

use tourbot_app::cli::{resolve_data_dir, IngestArgs};
use tourbot_app::ingest::read_document;
use tourbot_core::TourbotConfig;
use tourbot_index::{Chunker, FlatIndex, HttpEmbeddingService, IngestPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = IngestArgs::parse();
    let config = TourbotConfig::load_or_default(&args.resolve_config_path());
    let data_dir = resolve_data_dir(&config.general.data_dir, args.data_dir.as_deref());

    let embedder = HttpEmbeddingService::from_config(&config.embedding)?;
    let index = Arc::new(FlatIndex::new(config.embedding.dimensions));
    let pipeline = IngestPipeline::new(
        Arc::clone(&index),
        embedder,
        Chunker::from_config(&config.ingest),
    );

    tracing::info!(documents = args.inputs.len(), "Ingesting corpus");

    let mut total = 0usize;
    for path in &args.inputs {
        let text = read_document(path)?;
        let source = path.to_string_lossy().to_string();
        total += pipeline.ingest_document(&text, Some(&source)).await?;
    }

    let index_path = data_dir.join("index.json");
    index.save(&index_path)?;
    tracing::info!(
        passages = total,
        path = %index_path.display(),
        "Corpus ingested and snapshot saved"
    );

    Ok(())
}

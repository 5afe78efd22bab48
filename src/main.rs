// src/main.rs
use std::path::Path;

use pdf2qdrant::config::Config;
use pdf2qdrant::embedder::OpenAiEmbedder;
use pdf2qdrant::error::IngestError;
use pdf2qdrant::ingest;
use pdf2qdrant::vector_store::QdrantStore;

/// The document ingested on every run.
const INPUT_PATH: &str = "./document.pdf";

#[tokio::main]
async fn main() -> Result<(), IngestError> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // One client per service, built once and reused for every call.
    let embedder = OpenAiEmbedder::new(&config.openai_api_key)?;
    let store = QdrantStore::new(&config.qdrant_url, &config.qdrant_api_key)?;

    println!("📦 Provisioning collection: {}", config.qdrant_collection);
    ingest::provision_collection(&store, &config.qdrant_collection).await?;

    println!("📄 Ingesting {} ...", INPUT_PATH);
    let count = ingest::ingest_pdf(
        Path::new(INPUT_PATH),
        &config.qdrant_collection,
        &embedder,
        &store,
    )
    .await?;

    println!(
        "✅ Upserted {} chunks into '{}'",
        count, config.qdrant_collection
    );
    Ok(())
}

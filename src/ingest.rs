use std::path::Path;

use tracing::{info, warn};

use crate::chunker::{chunk_text, DEFAULT_CHUNK_SIZE};
use crate::embedder::{Embedder, EMBEDDING_DIM};
use crate::error::IngestResult;
use crate::pdf;
use crate::vector_store::{PointRecord, VectorStore};

/// Wipes and recreates the target collection.
///
/// Deletion failures (typically "collection does not exist") are absorbed;
/// creation failures are fatal. Any vectors already under this name are lost.
pub async fn provision_collection(store: &dyn VectorStore, name: &str) -> IngestResult<()> {
    match store.delete_collection(name).await {
        Ok(()) => info!(collection = %name, "Deleted existing collection"),
        Err(e) => {
            warn!(collection = %name, error = %e, "Could not delete collection (might not exist)")
        }
    }
    store.create_collection(name, EMBEDDING_DIM).await
}

/// Extracts a PDF's text and ingests it into `collection`.
pub async fn ingest_pdf(
    path: &Path,
    collection: &str,
    embedder: &dyn Embedder,
    store: &dyn VectorStore,
) -> IngestResult<usize> {
    let text = pdf::extract_text(path)?;
    ingest_text(&text, collection, embedder, store).await
}

/// Chunks raw text, embeds each chunk in order, and upserts all records in
/// a single call. Returns the number of records written.
///
/// The first embedding failure aborts the run; nothing built so far is
/// persisted.
pub async fn ingest_text(
    text: &str,
    collection: &str,
    embedder: &dyn Embedder,
    store: &dyn VectorStore,
) -> IngestResult<usize> {
    let chunks = chunk_text(text, DEFAULT_CHUNK_SIZE);
    info!(count = chunks.len(), "Chunked document");

    let mut points = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let preview: String = chunk.chars().take(100).collect();
        info!(preview = %preview, "Embedding chunk");
        let vector = embedder.embed(&chunk).await?;
        points.push(PointRecord::new(chunk, vector));
    }

    store.upsert(collection, &points).await?;
    Ok(points.len())
}

// src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Error types for the ingestion pipeline
#[derive(Debug, Error)]
pub enum IngestError {
    // Document
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    // Transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    // Embedding service
    #[error("Embedding service returned {status}: {body}")]
    EmbeddingService { status: StatusCode, body: String },

    #[error("Malformed embedding response: {0}")]
    MalformedEmbedding(String),

    // Vector store
    #[error("Vector store returned {status}: {body}")]
    VectorStore { status: StatusCode, body: String },
}

// src/embedder.rs

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// Embedding vector (1536-dimensional for text-embedding-3-small)
pub type EmbeddingVector = Vec<f32>;

/// Dimensionality of the vectors produced by the embedding model.
pub const EMBEDDING_DIM: usize = 1536;

/// Model identifier sent with every embedding request.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

const EMBEDDINGS_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Turns a chunk of text into a fixed-length embedding vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> IngestResult<EmbeddingVector>;
}

/// Embedding client backed by the OpenAI embeddings endpoint.
///
/// One request per chunk, no batching, no retries: the first failed call
/// terminates the run.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OpenAiEmbedder {
    /// Builds a client with the bearer token baked into its default headers.
    pub fn new(api_key: &str) -> IngestResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", api_key.trim());
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&auth)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: EMBEDDINGS_ENDPOINT.to_string(),
            model: EMBEDDING_MODEL.to_string(),
        })
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> IngestResult<EmbeddingVector> {
        let request = EmbeddingRequest {
            input: text,
            model: &self.model,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(IngestError::EmbeddingService { status, body });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let embedding = parsed.into_embedding()?;
        debug!(dimensions = embedding.len(), "Generated embedding");
        Ok(embedding)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: EmbeddingVector,
}

impl EmbeddingResponse {
    /// Takes the first embedding out of the response body.
    fn into_embedding(self) -> IngestResult<EmbeddingVector> {
        self.data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or_else(|| {
                IngestError::MalformedEmbedding("response contained no embedding data".to_string())
            })
    }
}

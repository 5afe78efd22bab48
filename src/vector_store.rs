// src/vector_store.rs

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::embedder::EmbeddingVector;
use crate::error::{IngestError, IngestResult};

/// Distance metric configured for every collection.
pub const DISTANCE_METRIC: &str = "Cosine";

/// A record persisted to the vector store: generated id, embedding, payload.
#[derive(Debug, Clone, Serialize)]
pub struct PointRecord {
    pub id: String,
    pub vector: EmbeddingVector,
    pub payload: PointPayload,
}

/// Payload attached to a point; keeps the original chunk text for retrieval.
#[derive(Debug, Clone, Serialize)]
pub struct PointPayload {
    pub text: String,
}

impl PointRecord {
    /// Creates a record with a freshly generated random id.
    pub fn new(text: String, vector: EmbeddingVector) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vector,
            payload: PointPayload { text },
        }
    }
}

/// Storage backend for vector records grouped into named collections.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Delete a named collection and all its data.
    async fn delete_collection(&self, name: &str) -> IngestResult<()>;

    /// Create a named collection configured for `vector_size`-dimensional
    /// vectors under the cosine metric.
    async fn create_collection(&self, name: &str, vector_size: usize) -> IngestResult<()>;

    /// Insert-or-replace points in a collection, keyed by point id.
    async fn upsert(&self, name: &str, points: &[PointRecord]) -> IngestResult<()>;
}

/// Qdrant client speaking the REST API.
pub struct QdrantStore {
    client: reqwest::Client,
    base_url: String,
}

impl QdrantStore {
    /// Builds a client with the `api-key` header baked in. An empty key
    /// omits the header, as for a local unauthenticated instance.
    pub fn new(url: &str, api_key: &str) -> IngestResult<Self> {
        let mut headers = HeaderMap::new();
        if !api_key.trim().is_empty() {
            headers.insert("api-key", HeaderValue::from_str(api_key.trim())?);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, name: &str) -> String {
        format!("{}/collections/{}", self.base_url, name)
    }

    async fn check(response: reqwest::Response) -> IngestResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<body unavailable>".to_string());
        Err(IngestError::VectorStore { status, body })
    }
}

#[async_trait]
impl VectorStore for QdrantStore {
    async fn delete_collection(&self, name: &str) -> IngestResult<()> {
        debug!(collection = %name, "Deleting collection");
        let response = self.client.delete(self.collection_url(name)).send().await?;
        Self::check(response).await
    }

    async fn create_collection(&self, name: &str, vector_size: usize) -> IngestResult<()> {
        info!(collection = %name, vector_size, "Creating collection");
        let request = CreateCollectionRequest {
            vectors: VectorParams {
                size: vector_size,
                distance: DISTANCE_METRIC,
            },
        };
        let response = self
            .client
            .put(self.collection_url(name))
            .json(&request)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn upsert(&self, name: &str, points: &[PointRecord]) -> IngestResult<()> {
        info!(collection = %name, count = points.len(), "Upserting points");
        let request = UpsertPointsRequest { points };
        let url = format!("{}/points", self.collection_url(name));
        let response = self.client.put(url).json(&request).send().await?;
        Self::check(response).await
    }
}

#[derive(Serialize)]
struct CreateCollectionRequest {
    vectors: VectorParams,
}

#[derive(Serialize)]
struct VectorParams {
    size: usize,
    distance: &'static str,
}

#[derive(Serialize)]
struct UpsertPointsRequest<'a> {
    points: &'a [PointRecord],
}

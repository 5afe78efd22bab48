// src/config.rs
use std::env;

/// Process-wide configuration, read once at startup.
///
/// Values are not validated here; a missing endpoint or API key surfaces
/// later as a connection or authorization failure from the relevant client.
#[derive(Debug, Clone)]
pub struct Config {
    pub qdrant_url: String,
    pub qdrant_collection: String,
    pub qdrant_api_key: String,
    pub openai_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let qdrant_url =
            env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6333".to_string());
        let qdrant_collection =
            env::var("QDRANT_COLLECTION").unwrap_or_else(|_| "documents".to_string());
        let qdrant_api_key = env::var("QDRANT_API_KEY").unwrap_or_default();
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        Self {
            qdrant_url,
            qdrant_collection,
            qdrant_api_key,
            openai_api_key,
        }
    }
}

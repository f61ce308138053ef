//! Runtime and collection configuration.

use crate::errors::StoreError;

/// Configuration for section ingestion and retrieval.
///
/// Vectors are compared with cosine distance; the collection is created on
/// first ingestion if it does not exist yet.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Qdrant endpoint, e.g. `http://localhost:6334`.
    pub qdrant_url: String,
    /// Optional API key for Qdrant Cloud.
    pub qdrant_api_key: Option<String>,
    /// Target collection name.
    pub collection: String,
    /// Dimensionality of the embedding vectors.
    pub embedding_dim: usize,
    /// Upsert batch size.
    pub upsert_batch: usize,
    /// Concurrent embedding requests during ingestion.
    pub embed_concurrency: usize,
}

impl StoreConfig {
    /// Creates a sane default config for a given Qdrant endpoint, collection
    /// name and embedding dimension.
    pub fn new_default(
        url: impl Into<String>,
        collection: impl Into<String>,
        embedding_dim: usize,
    ) -> Self {
        Self {
            qdrant_url: url.into(),
            qdrant_api_key: None,
            collection: collection.into(),
            embedding_dim,
            upsert_batch: 256,
            embed_concurrency: 4,
        }
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.qdrant_url.trim().is_empty() {
            return Err(StoreError::Config("qdrant_url is empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(StoreError::Config("collection is empty".into()));
        }
        if self.embedding_dim == 0 {
            return Err(StoreError::Config("embedding_dim must be > 0".into()));
        }
        if self.upsert_batch == 0 {
            return Err(StoreError::Config("upsert_batch must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(StoreConfig::new_default("http://127.0.0.1:6334", "laws", 1536)
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let cfg = StoreConfig::new_default("http://127.0.0.1:6334", "laws", 0);
        assert!(cfg.validate().is_err());
    }
}

//! Embedding provider backed by the shared LLM service profiles.

use std::sync::Arc;

use ai_llm_service::service_profiles::LlmServiceProfiles;

use crate::{EmbeddingsProvider, StoreError};

/// Adapter from [`LlmServiceProfiles`] to the store's embedding seam.
///
/// Enforces the configured vector dimensionality so a misconfigured
/// embedding model is caught on the first call rather than at search time.
#[derive(Clone)]
pub struct ProfilesEmbedder {
    svc: Arc<LlmServiceProfiles>,
    dim: usize,
}

impl ProfilesEmbedder {
    /// Constructs a new embedder over the shared service.
    pub fn new(svc: Arc<LlmServiceProfiles>, dim: usize) -> Self {
        Self { svc, dim }
    }
}

impl EmbeddingsProvider for ProfilesEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<f32>, StoreError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let vector = self.svc.embed(text).await?;
            if vector.len() != self.dim {
                return Err(StoreError::VectorSizeMismatch {
                    got: vector.len(),
                    want: self.dim,
                });
            }
            Ok(vector)
        })
    }
}

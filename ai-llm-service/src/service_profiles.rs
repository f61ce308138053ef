//! Shared LLM service with two active profiles: **synthesis** and **embedding**.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Clients are built eagerly at construction, so configuration mistakes
//!   (bad endpoint, missing key) surface at startup rather than mid-query.

use crate::{
    config::llm_model_config::LlmModelConfig,
    config::llm_provider::LlmProvider,
    error_handler::Result,
    services::{ollama_service::OllamaService, open_ai_service::OpenAiService},
};

/// One constructed provider client, regardless of backend.
enum ProviderClient {
    OpenAi(OpenAiService),
    Ollama(OllamaService),
}

impl ProviderClient {
    fn from_config(cfg: LlmModelConfig) -> Result<Self> {
        match cfg.provider {
            LlmProvider::OpenAi => Ok(Self::OpenAi(OpenAiService::new(cfg)?)),
            LlmProvider::Ollama => Ok(Self::Ollama(OllamaService::new(cfg)?)),
        }
    }

    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        match self {
            Self::OpenAi(cli) => cli.generate(prompt, system).await,
            Self::Ollama(cli) => cli.generate(prompt, system).await,
        }
    }

    async fn embeddings(&self, input: &str) -> Result<Vec<f32>> {
        match self {
            Self::OpenAi(cli) => cli.embeddings(input).await,
            Self::Ollama(cli) => cli.embeddings(input).await,
        }
    }
}

/// Service that manages the two logical LLM profiles the application needs:
/// **synthesis** (answer generation) and **embedding** (vectors).
pub struct LlmServiceProfiles {
    synthesis: ProviderClient,
    embedding: ProviderClient,
}

impl LlmServiceProfiles {
    /// Creates a new service from the two profile configs.
    ///
    /// # Errors
    /// Returns configuration errors from the underlying client constructors.
    pub fn new(synthesis: LlmModelConfig, embedding: LlmModelConfig) -> Result<Self> {
        Ok(Self {
            synthesis: ProviderClient::from_config(synthesis)?,
            embedding: ProviderClient::from_config(embedding)?,
        })
    }

    /// Generates answer text using the **synthesis** profile.
    ///
    /// # Errors
    /// Returns [`crate::AiLlmError`] if generation fails.
    pub async fn synthesize(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        self.synthesis.generate(prompt, system).await
    }

    /// Computes an embedding vector using the **embedding** profile.
    ///
    /// # Errors
    /// Returns [`crate::AiLlmError`] if the embedding call fails.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>> {
        self.embedding.embeddings(input).await
    }
}

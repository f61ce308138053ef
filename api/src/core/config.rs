//! Service configuration, loaded from environment variables once at startup
//! and passed into collaborator constructors explicitly.

use ai_llm_service::config::{LlmModelConfig, LlmProvider};
use doc_store::StoreConfig;

use crate::error_handler::AppError;

/// All knobs for one service process.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address for the HTTP listener, e.g. `0.0.0.0:8080`.
    pub api_address: String,
    /// Path to the extracted markdown document produced by the upstream
    /// PDF extraction step.
    pub document_path: String,

    // Vector store
    pub qdrant_url: String,
    pub qdrant_api_key: Option<String>,
    pub collection: String,
    pub upsert_batch: usize,
    pub embedding_dim: usize,
    pub embed_concurrency: usize,

    // Retrieval / prompt knobs
    pub top_k: usize,
    pub max_ctx_chars: usize,

    // LLM profiles
    pub provider: LlmProvider,
    pub synthesis_model: Option<String>,
    pub embed_model: Option<String>,
    pub openai_endpoint: String,
    pub openai_api_key: Option<String>,
    pub ollama_url: String,
    pub llm_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// Load the configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`AppError::MissingEnv`] / [`AppError::InvalidEnv`] for
    /// values that are required or unparsable.
    pub fn from_env() -> Result<Self, AppError> {
        let provider: LlmProvider = env("LLM_PROVIDER", "openai")
            .parse()
            .map_err(|_| AppError::InvalidEnv {
                var: "LLM_PROVIDER",
                reason: "expected 'openai' or 'ollama'",
            })?;

        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        if provider == LlmProvider::OpenAi && openai_api_key.is_none() {
            return Err(AppError::MissingEnv("OPENAI_API_KEY"));
        }

        Ok(Self {
            api_address: env("API_ADDRESS", "0.0.0.0:8080"),
            document_path: env("DOCUMENT_PATH", "docs/laws.md"),

            qdrant_url: env("QDRANT_URL", "http://127.0.0.1:6334"),
            qdrant_api_key: std::env::var("QDRANT_API_KEY").ok(),
            collection: env("QDRANT_COLLECTION", "laws"),
            upsert_batch: parse("QDRANT_BATCH_SIZE", 256usize),
            embedding_dim: parse("EMBEDDING_DIM", 1536usize),
            embed_concurrency: parse("EMBED_CONCURRENCY", 4usize),

            top_k: parse("RAG_TOP_K", 3usize),
            max_ctx_chars: parse("MAX_CTX_CHARS", 8500usize),

            provider,
            synthesis_model: std::env::var("SYNTHESIS_MODEL").ok(),
            embed_model: std::env::var("EMBED_MODEL").ok(),
            openai_endpoint: env("OPENAI_ENDPOINT", "https://api.openai.com"),
            openai_api_key,
            ollama_url: env("OLLAMA_URL", "http://localhost:11434"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        })
    }

    /// The `(synthesis, embedding)` model profiles for the selected provider.
    pub fn llm_profiles(&self) -> (LlmModelConfig, LlmModelConfig) {
        let (endpoint, default_synthesis, default_embed) = match self.provider {
            LlmProvider::OpenAi => (
                self.openai_endpoint.clone(),
                "gpt-5-nano",
                "text-embedding-3-small",
            ),
            LlmProvider::Ollama => (self.ollama_url.clone(), "qwen3:8b", "nomic-embed-text"),
        };

        let synthesis = LlmModelConfig {
            provider: self.provider,
            model: self
                .synthesis_model
                .clone()
                .unwrap_or_else(|| default_synthesis.to_string()),
            endpoint: endpoint.clone(),
            api_key: self.openai_api_key.clone(),
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: self.llm_timeout_secs,
        };

        let embedding = LlmModelConfig {
            model: self
                .embed_model
                .clone()
                .unwrap_or_else(|| default_embed.to_string()),
            temperature: None,
            ..synthesis.clone()
        };

        (synthesis, embedding)
    }

    /// Convert to the `doc_store::StoreConfig` used by `SectionStore`.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            qdrant_url: self.qdrant_url.clone(),
            qdrant_api_key: self.qdrant_api_key.clone(),
            collection: self.collection.clone(),
            embedding_dim: self.embedding_dim,
            upsert_batch: self.upsert_batch,
            embed_concurrency: self.embed_concurrency,
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}

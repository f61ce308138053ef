use crate::config::llm_provider::LlmProvider;

/// Configuration for one LLM model invocation profile.
///
/// The same struct serves both generation and embedding profiles; which
/// endpoints get used is decided by the service that consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"gpt-5-nano"`, `"text-embedding-3-small"`).
    pub model: String,

    /// Inference endpoint base URL (remote API or local server).
    pub endpoint: String,

    /// Optional API key for authentication (required by OpenAI).
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

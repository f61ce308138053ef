//! Typed error for the counsel crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounselError {
    /// Errors from the underlying doc-store crate.
    #[error("store error: {0}")]
    Store(#[from] doc_store::StoreError),

    /// Errors from the LLM service (synthesis or embedding).
    #[error("LLM error: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),
}

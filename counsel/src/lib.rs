//! RAG + LLM gateway for the law Q&A service.
//!
//! [`QaService`] embeds the question, retrieves the top-K law sections from
//! the vector store, builds a compact grounded prompt, calls the synthesis
//! profile, and returns the answer together with a bounded citation list.

mod api_types;
mod citations;
mod error;
mod prompt;

pub use api_types::{Citation, QueryResult};
pub use citations::format_citations;
pub use error::CounselError;

use std::sync::Arc;

use ai_llm_service::service_profiles::LlmServiceProfiles;
use doc_store::{SectionStore, embed::profiles::ProfilesEmbedder};
use tracing::{debug, info};

/// Knobs for question answering.
#[derive(Debug, Clone)]
pub struct QaOptions {
    /// Number of retrieval candidates, and the citation bound.
    pub top_k: usize,
    /// Character budget for the context block of the prompt.
    pub max_ctx_chars: usize,
}

impl Default for QaOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_ctx_chars: 8500,
        }
    }
}

/// Query-answering service over an already-indexed document store.
pub struct QaService {
    store: SectionStore,
    svc: Arc<LlmServiceProfiles>,
    embedder: ProfilesEmbedder,
    opts: QaOptions,
}

impl QaService {
    /// Wires the service from its collaborators. The store is expected to
    /// have been indexed; querying an unindexed store fails loudly.
    pub fn new(
        store: SectionStore,
        svc: Arc<LlmServiceProfiles>,
        embedder: ProfilesEmbedder,
        opts: QaOptions,
    ) -> Self {
        Self {
            store,
            svc,
            embedder,
            opts,
        }
    }

    /// Answers one natural-language question with citations.
    ///
    /// # Errors
    /// Propagates retrieval and synthesis failures; parsing-level
    /// irregularities (missing metadata, empty hits) are absorbed by the
    /// fallback rules instead.
    pub async fn answer(&self, question: &str) -> Result<QueryResult, CounselError> {
        debug!(top_k = self.opts.top_k, "retrieving context");
        let hits = self
            .store
            .retrieve(question, self.opts.top_k as u64, &self.embedder)
            .await?;

        debug!(hits = hits.len(), "building prompt");
        let user_prompt = prompt::build_user_prompt(question, &hits, self.opts.max_ctx_chars);

        let answer = self
            .svc
            .synthesize(&user_prompt, Some(prompt::DEFAULT_SYSTEM))
            .await?;

        let citations = citations::format_citations(&hits, self.opts.top_k);
        info!(citations = citations.len(), "query answered");

        Ok(QueryResult::assemble(
            question.to_string(),
            answer,
            citations,
        ))
    }
}

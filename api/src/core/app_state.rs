use std::sync::Arc;

use ai_llm_service::service_profiles::LlmServiceProfiles;
use counsel::{QaOptions, QaService};
use doc_store::{SectionStore, embed::profiles::ProfilesEmbedder};
use tracing::info;

use crate::core::config::ServiceConfig;
use crate::core::extraction;
use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Query-answering service over the indexed document.
    pub qa: QaService,
}

impl AppState {
    /// Boot sequence: load the extracted document, segment it, index the
    /// sections, and wire the query service.
    ///
    /// This runs once per process. Queries are then served against the
    /// already-built index instead of re-reading the document per request.
    pub async fn initialize(cfg: &ServiceConfig) -> Result<Self, AppError> {
        let (synthesis, embedding) = cfg.llm_profiles();
        let svc = Arc::new(LlmServiceProfiles::new(synthesis, embedding)?);
        let embedder = ProfilesEmbedder::new(svc.clone(), cfg.embedding_dim);

        let text = extraction::load_document(&cfg.document_path)?;
        let sections = law_segmenter::segment_document(&text);
        info!(sections = sections.len(), "document segmented");

        let store = SectionStore::new(cfg.store_config())?;
        let indexed = store.index_sections(&sections, &embedder).await?;
        info!(points = indexed, collection = %cfg.collection, "document indexed");

        let qa = QaService::new(
            store,
            svc,
            embedder,
            QaOptions {
                top_k: cfg.top_k,
                max_ctx_chars: cfg.max_ctx_chars,
            },
        );

        Ok(Self { qa })
    }
}

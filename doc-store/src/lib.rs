//! Section index over Qdrant: ingestion + retrieval for the law document.
//!
//! This crate provides a small API to:
//! - Index the segmented [`law_segmenter::Section`] sequence (embedding each
//!   body, upserting points with typed metadata payloads)
//! - Retrieve the top-K most similar sections for a textual query
//!
//! The design is flat and splits responsibilities into focused modules.

mod config;
mod errors;
mod ingest;
mod qdrant_index;
mod record;
mod retrieve;

pub mod embed;

pub use config::StoreConfig;
pub use embed::EmbeddingsProvider;
pub use errors::StoreError;
pub use record::{SectionHit, SectionRecord};

use std::sync::atomic::{AtomicBool, Ordering};

use law_segmenter::Section;
use tracing::{debug, trace};

/// High-level facade that wires configuration and the Qdrant client.
///
/// Retrieval before [`SectionStore::index_sections`] has completed is a
/// contract violation and fails with [`StoreError::NotIndexed`] instead of
/// silently returning nothing.
pub struct SectionStore {
    cfg: StoreConfig,
    index: qdrant_index::VectorIndex,
    indexed: AtomicBool,
}

impl SectionStore {
    /// Constructs a new store from the given configuration.
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the client initialization fails.
    pub fn new(cfg: StoreConfig) -> Result<Self, StoreError> {
        trace!("SectionStore::new collection={}", cfg.collection);
        let index = qdrant_index::VectorIndex::new(&cfg)?;
        Ok(Self {
            cfg,
            index,
            indexed: AtomicBool::new(false),
        })
    }

    /// Embeds and upserts the segmented sections into the collection.
    ///
    /// An empty section sequence still marks the store as indexed (the
    /// collection exists, queries will simply find nothing).
    ///
    /// # Errors
    /// Returns errors on embedding failures, vector size mismatch, or
    /// Qdrant failures.
    pub async fn index_sections(
        &self,
        sections: &[Section],
        provider: &dyn EmbeddingsProvider,
    ) -> Result<u64, StoreError> {
        debug!("SectionStore::index_sections count={}", sections.len());
        let total = ingest::index_sections(&self.cfg, &self.index, sections, provider).await?;
        self.indexed.store(true, Ordering::SeqCst);
        Ok(total)
    }

    /// Embeds the query text and returns the ranked section hits.
    ///
    /// # Errors
    /// Returns [`StoreError::NotIndexed`] when called before ingestion,
    /// embedding errors, or Qdrant failures.
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: u64,
        provider: &dyn EmbeddingsProvider,
    ) -> Result<Vec<SectionHit>, StoreError> {
        if !self.indexed.load(Ordering::SeqCst) {
            return Err(StoreError::NotIndexed);
        }
        trace!("SectionStore::retrieve top_k={top_k}");
        retrieve::search_sections(&self.index, query, top_k, provider).await
    }
}

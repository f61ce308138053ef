//! Retrieval: embed the query, search the collection, type the hits.

use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use crate::qdrant_index::VectorIndex;
use crate::record::SectionHit;

use tracing::trace;

/// Embeds the query text and returns typed section hits, ranked by score.
///
/// # Errors
/// Returns embedding/provider errors or Qdrant failures.
pub async fn search_sections(
    index: &VectorIndex,
    query: &str,
    top_k: u64,
    provider: &dyn EmbeddingsProvider,
) -> Result<Vec<SectionHit>, StoreError> {
    trace!("retrieve::search_sections top_k={top_k}");

    let query_vector = provider.embed(query).await?;
    let raw = index.search(query_vector, top_k).await?;

    let hits = raw
        .into_iter()
        .map(|(score, payload)| hit_from_payload(score, &payload))
        .collect::<Vec<_>>();

    trace!("retrieve::search_sections hits={}", hits.len());
    Ok(hits)
}

/// Maps one raw `(score, payload)` pair into a typed hit. Absent metadata
/// fields stay `None`; they never fail the mapping.
fn hit_from_payload(score: f32, payload: &serde_json::Value) -> SectionHit {
    let text = payload
        .get("text")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let section_label = payload
        .get("section")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());
    let page = payload.get("page").and_then(|v| v.as_u64());

    SectionHit {
        score,
        text,
        section_label,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_maps_to_typed_hit() {
        let hit = hit_from_payload(
            0.87,
            &json!({
                "text": "A trial is convened by the Crown.",
                "section": "Law 4.1.1",
                "title": "Trials of the Crown",
                "page": 3,
            }),
        );

        assert_eq!(hit.score, 0.87);
        assert_eq!(hit.text, "A trial is convened by the Crown.");
        assert_eq!(hit.section_label.as_deref(), Some("Law 4.1.1"));
        assert_eq!(hit.page, Some(3));
    }

    #[test]
    fn missing_metadata_degrades_to_none() {
        let hit = hit_from_payload(0.5, &json!({ "text": "orphan snippet" }));
        assert_eq!(hit.section_label, None);
        assert_eq!(hit.page, None);
        assert_eq!(hit.text, "orphan snippet");
    }

    #[test]
    fn empty_payload_still_produces_a_hit() {
        let hit = hit_from_payload(0.1, &json!({}));
        assert_eq!(hit.text, "");
        assert_eq!(hit.section_label, None);
    }
}

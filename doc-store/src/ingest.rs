//! Ingestion pipeline: sections → records → vectors → upsert into Qdrant.

use crate::config::StoreConfig;
use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use crate::qdrant_index::VectorIndex;
use crate::record::SectionRecord;

use futures::{StreamExt, TryStreamExt, stream};
use law_segmenter::Section;
use qdrant_client::qdrant::{
    PointId, PointStruct, Value as QValue, Vector, Vectors, value, vectors,
};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Embeds the given sections and upserts them into the collection.
///
/// Returns the number of points written. An empty input only ensures the
/// collection exists.
pub async fn index_sections(
    cfg: &StoreConfig,
    index: &VectorIndex,
    sections: &[Section],
    provider: &dyn EmbeddingsProvider,
) -> Result<u64, StoreError> {
    index.ensure_collection(cfg.embedding_dim).await?;

    if sections.is_empty() {
        debug!("No sections to index");
        return Ok(0);
    }

    let records: Vec<SectionRecord> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| SectionRecord::from_section(i, s))
        .collect();

    info!("Embedding {} section records", records.len());
    let vectors = embed_records(&records, provider, cfg.embed_concurrency).await?;

    let mut total: u64 = 0;
    let batch_size = cfg.upsert_batch.max(1);
    for (recs, vecs) in records
        .chunks(batch_size)
        .zip(vectors.chunks(batch_size))
    {
        let points = build_points(recs, vecs, cfg.embedding_dim)?;
        total += index.upsert_points(points).await?;
    }

    info!("Indexed {} sections", total);
    Ok(total)
}

/// Embeds all record texts, at most `concurrency` requests in flight.
/// Output order matches input order.
async fn embed_records(
    records: &[SectionRecord],
    provider: &dyn EmbeddingsProvider,
    concurrency: usize,
) -> Result<Vec<Vec<f32>>, StoreError> {
    stream::iter(records.iter().map(|r| provider.embed(&r.text)))
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}

/// Builds Qdrant points for a batch of records with resolved vectors.
fn build_points(
    records: &[SectionRecord],
    vectors: &[Vec<f32>],
    expected_dim: usize,
) -> Result<Vec<PointStruct>, StoreError> {
    let mut pts = Vec::with_capacity(records.len());

    for (record, vector) in records.iter().zip(vectors.iter()) {
        if vector.len() != expected_dim {
            return Err(StoreError::VectorSizeMismatch {
                got: vector.len(),
                want: expected_dim,
            });
        }

        let payload = record_payload(record);
        let pid: PointId = stable_point_id(&record.id).into();

        let vectors = Vectors {
            vectors_options: Some(vectors::VectorsOptions::Vector(Vector {
                data: vector.clone(),
                indices: None,
                vectors_count: None,
                vector: None,
            })),
        };

        pts.push(PointStruct {
            id: Some(pid),
            payload,
            vectors: Some(vectors),
            ..Default::default()
        });
    }

    Ok(pts)
}

/// Compact payload with the typed section metadata.
pub(crate) fn record_payload(record: &SectionRecord) -> HashMap<String, QValue> {
    let mut payload: HashMap<String, QValue> = HashMap::new();

    payload.insert("text".into(), qstring(&record.text));
    if let Some(label) = &record.section_label {
        payload.insert("section".into(), qstring(label));
    }
    if let Some(title) = &record.title {
        payload.insert("title".into(), qstring(title));
    }
    if let Some(page) = record.page {
        payload.insert(
            "page".into(),
            QValue {
                kind: Some(value::Kind::IntegerValue(page as i64)),
            },
        );
    }

    payload
}

/// Deterministic UUIDv5 point id from the record id, so re-ingesting the
/// same document overwrites points instead of duplicating them.
fn stable_point_id(record_id: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, record_id.as_bytes()).to_string()
}

/// Wraps a string into a Qdrant `Value`.
fn qstring(s: &str) -> QValue {
    QValue {
        kind: Some(value::Kind::StringValue(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SectionRecord {
        SectionRecord {
            id: "0000:Law 5".into(),
            text: "Tax evasion is punishable by banishment.".into(),
            section_label: Some("Law 5".into()),
            title: None,
            page: Some(2),
        }
    }

    #[test]
    fn payload_keeps_typed_fields_and_skips_absent_ones() {
        let payload = record_payload(&record());

        assert!(matches!(
            payload.get("text").and_then(|v| v.kind.as_ref()),
            Some(value::Kind::StringValue(s)) if s == "Tax evasion is punishable by banishment."
        ));
        assert!(matches!(
            payload.get("section").and_then(|v| v.kind.as_ref()),
            Some(value::Kind::StringValue(s)) if s == "Law 5"
        ));
        assert!(matches!(
            payload.get("page").and_then(|v| v.kind.as_ref()),
            Some(value::Kind::IntegerValue(2))
        ));
        assert!(!payload.contains_key("title"));
    }

    #[test]
    fn point_ids_are_stable_per_record() {
        assert_eq!(stable_point_id("0000:Law 5"), stable_point_id("0000:Law 5"));
        assert_ne!(stable_point_id("0000:Law 5"), stable_point_id("0001:Law 5"));
    }

    #[test]
    fn mismatched_vector_is_rejected() {
        let records = vec![record()];
        let vectors = vec![vec![0.1_f32; 8]];
        let err = build_points(&records, &vectors, 16).unwrap_err();
        assert!(matches!(
            err,
            StoreError::VectorSizeMismatch { got: 8, want: 16 }
        ));
    }
}

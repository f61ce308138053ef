//! Core data models used by the library.
//!
//! Metadata travels as explicit optional fields rather than an open
//! key-value bag, so the citation fallback chain downstream stays
//! statically checkable.

use law_segmenter::Section;
use serde::{Deserialize, Serialize};

/// Canonical record stored in Qdrant during ingestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Stable record id; feeds the deterministic point id.
    pub id: String,
    /// Text that gets embedded and retrieved.
    pub text: String,
    /// Citation label of the originating section, e.g. `"Law 4.1.2"`.
    pub section_label: Option<String>,
    /// Heading title inherited by the section, if any.
    pub title: Option<String>,
    /// Source page number, when the upstream extraction provides one.
    pub page: Option<u64>,
}

impl SectionRecord {
    /// Builds the record for one segmented section. `ordinal` is the
    /// section's position in document order and keeps ids unique even if
    /// the document repeats a section number.
    pub fn from_section(ordinal: usize, section: &Section) -> Self {
        Self {
            id: format!("{:04}:{}", ordinal, section.label()),
            text: section.body.clone(),
            section_label: Some(section.label()),
            title: section.title.clone(),
            page: None,
        }
    }
}

/// A single retrieval hit with score, text and typed metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionHit {
    /// Similarity score, higher is more relevant.
    pub score: f32,
    /// Verbatim stored text.
    pub text: String,
    /// Citation label of the originating section, if stored.
    pub section_label: Option<String>,
    /// Source page number, if stored.
    pub page: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_section_metadata() {
        let section = Section {
            number: "4.1.2".into(),
            title: Some("Trials of the Crown".into()),
            body: "The accused may call one witness.".into(),
        };
        let record = SectionRecord::from_section(7, &section);

        assert_eq!(record.id, "0007:Law 4.1.2");
        assert_eq!(record.section_label.as_deref(), Some("Law 4.1.2"));
        assert_eq!(record.title.as_deref(), Some("Trials of the Crown"));
        assert_eq!(record.text, "The accused may call one witness.");
        assert_eq!(record.page, None);
    }
}

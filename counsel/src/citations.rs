//! Citation assembly: ranked retrieval hits → bounded, ordered citations.

use doc_store::SectionHit;

use crate::api_types::Citation;

/// Maps the first `min(top_k, hits.len())` hits to citations, preserving
/// input order.
///
/// Missing metadata degrades through the label fallback chain (section
/// label, then page label, then `"Unknown"`) and never fails. Hit text is
/// carried over verbatim.
pub fn format_citations(hits: &[SectionHit], top_k: usize) -> Vec<Citation> {
    hits.iter()
        .take(top_k)
        .map(|hit| Citation {
            source: source_label(hit),
            text: hit.text.clone(),
        })
        .collect()
}

fn source_label(hit: &SectionHit) -> String {
    if let Some(label) = &hit.section_label {
        return label.clone();
    }
    if let Some(page) = hit.page {
        return format!("Page {page}");
    }
    "Unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(label: Option<&str>, page: Option<u64>, text: &str) -> SectionHit {
        SectionHit {
            score: 0.5,
            text: text.into(),
            section_label: label.map(Into::into),
            page,
        }
    }

    #[test]
    fn bounded_by_top_k() {
        let hits = vec![
            hit(Some("Law 1"), None, "a"),
            hit(Some("Law 2"), None, "b"),
            hit(Some("Law 3"), None, "c"),
        ];
        assert_eq!(format_citations(&hits, 2).len(), 2);
        assert_eq!(format_citations(&hits, 0).len(), 0);
    }

    #[test]
    fn bounded_by_available_hits() {
        let hits = vec![hit(Some("Law 1"), None, "a")];
        assert_eq!(format_citations(&hits, 5).len(), 1);
        assert!(format_citations(&[], 3).is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        let hits = vec![
            hit(Some("Law 9"), None, "first"),
            hit(Some("Law 2"), None, "second"),
            hit(Some("Law 5"), None, "third"),
        ];
        let sources: Vec<String> = format_citations(&hits, 3)
            .into_iter()
            .map(|c| c.source)
            .collect();
        assert_eq!(sources, vec!["Law 9", "Law 2", "Law 5"]);
    }

    #[test]
    fn source_falls_back_from_label_to_page_to_unknown() {
        let hits = vec![
            hit(Some("Law 4.1.2"), Some(9), "labelled"),
            hit(None, Some(7), "paged"),
            hit(None, None, "bare"),
        ];
        let citations = format_citations(&hits, 3);
        assert_eq!(citations[0].source, "Law 4.1.2");
        assert_eq!(citations[1].source, "Page 7");
        assert_eq!(citations[2].source, "Unknown");
    }

    #[test]
    fn text_is_verbatim() {
        let text = "  spacing and\nline breaks stay untouched  ";
        let citations = format_citations(&[hit(None, None, text)], 1);
        assert_eq!(citations[0].text, text);
    }
}

//! The segmentation state machine: one forward pass over classified lines.

use regex::Regex;
use tracing::debug;

use crate::line::{LineClassifier, LineKind};
use crate::section::Section;

/// The most recent bold heading seen during the scan. Replaced whenever a
/// new heading line appears; never emitted as output itself.
struct HeadingContext {
    prefix: String,
    title: String,
}

/// A section currently being accumulated.
struct OpenSection {
    number: String,
    title: Option<String>,
    lines: Vec<String>,
}

impl OpenSection {
    /// Close the section. Returns `None` when the accumulated body is empty
    /// after trimming, in which case no section is emitted at all.
    fn finalize(self) -> Option<Section> {
        let body = self.lines.join("\n").trim().to_string();
        if body.is_empty() {
            return None;
        }
        Some(Section {
            number: self.number,
            title: self.title,
            body,
        })
    }
}

/// Segment the extracted document text into an ordered list of sections.
///
/// The scan is deterministic: the same input always produces the same
/// sequence, in document appearance order. A document in which no numbered
/// line is found collapses into a single fallback section numbered `"1"`,
/// so every non-empty document yields at least one retrievable unit.
pub fn segment_document(text: &str) -> Vec<Section> {
    let classifier = LineClassifier::new();
    let content = strip_citations_block(text);

    let mut sections: Vec<Section> = Vec::new();
    let mut heading: Option<HeadingContext> = None;
    let mut open: Option<OpenSection> = None;

    for raw_line in content.lines() {
        match classifier.classify(raw_line) {
            LineKind::Heading { prefix, title } => {
                // Finish any in-progress section before switching headings.
                if let Some(done) = open.take().and_then(OpenSection::finalize) {
                    sections.push(done);
                }
                heading = Some(HeadingContext { prefix, title });
            }
            LineKind::Numbered { number, rest } => {
                if let Some(done) = open.take().and_then(OpenSection::finalize) {
                    sections.push(done);
                }
                let title = heading
                    .as_ref()
                    .filter(|h| inherits_title(&number, &h.prefix))
                    .map(|h| h.title.clone());
                let lines = if rest.is_empty() { Vec::new() } else { vec![rest] };
                open = Some(OpenSection {
                    number,
                    title,
                    lines,
                });
            }
            LineKind::Other => {
                // Continuation lines only count while a section is open;
                // stray text between sections is dropped.
                if let Some(section) = open.as_mut() {
                    section.lines.push(raw_line.trim_end().to_string());
                }
            }
        }
    }

    if let Some(done) = open.take().and_then(OpenSection::finalize) {
        sections.push(done);
    }

    if sections.is_empty() {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            debug!("no numbered sections found; emitting single fallback section");
            sections.push(Section {
                number: "1".to_string(),
                title: None,
                body: trimmed.to_string(),
            });
        }
    }

    debug!(count = sections.len(), "segmentation finished");
    sections
}

/// A section numbered `number` inherits a heading title only when `number`
/// is the heading prefix itself or a dotted descendant of it, so `"4.11"`
/// does not inherit from `"4.1"`.
fn inherits_title(number: &str, prefix: &str) -> bool {
    number
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Cut the text off at the first line containing a `Citations:` marker
/// (any case, optionally bold). That line and everything after it are
/// excluded from segmentation.
fn strip_citations_block(text: &str) -> &str {
    let marker =
        Regex::new(r"(?i)(\*\*citations:\*\*|citations:)").expect("citations pattern is valid");
    match marker.find(text) {
        Some(m) => {
            let line_start = text[..m.start()].rfind('\n').map_or(0, |i| i + 1);
            &text[..line_start]
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_title_flows_into_numbered_sections() {
        let input = "**4.1.** **Trials of the Crown**\n\
                     4.1.1. A trial is convened by the Crown.\n\
                     continued detail.\n\
                     4.1.2. The accused may call one witness.";
        let sections = segment_document(input);

        assert_eq!(
            sections,
            vec![
                Section {
                    number: "4.1.1".into(),
                    title: Some("Trials of the Crown".into()),
                    body: "A trial is convened by the Crown.\ncontinued detail.".into(),
                },
                Section {
                    number: "4.1.2".into(),
                    title: Some("Trials of the Crown".into()),
                    body: "The accused may call one witness.".into(),
                },
            ]
        );
    }

    #[test]
    fn citations_block_is_excluded() {
        let input = "5. Tax evasion is punishable by banishment.\n\
                     **Citations:**\n\
                     Some footnote.";
        let sections = segment_document(input);

        assert_eq!(
            sections,
            vec![Section {
                number: "5".into(),
                title: None,
                body: "Tax evasion is punishable by banishment.".into(),
            }]
        );
    }

    #[test]
    fn citations_marker_is_case_insensitive_and_unbolded() {
        let input = "1. First law.\nciTAtions: trailing\n2. Ghost law.";
        let sections = segment_document(input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].number, "1");
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(segment_document("   \n\t \n").is_empty());
        assert!(segment_document("").is_empty());
    }

    #[test]
    fn unstructured_text_falls_back_to_single_section() {
        let sections = segment_document("General preamble text with no structure.");
        assert_eq!(
            sections,
            vec![Section {
                number: "1".into(),
                title: None,
                body: "General preamble text with no structure.".into(),
            }]
        );
    }

    #[test]
    fn title_inheritance_requires_matching_prefix() {
        let input = "**4.1.** **Trials of the Crown**\n\
                     4.1. The prefix itself.\n\
                     4.1.2. A descendant.\n\
                     4.11. Not a descendant.\n\
                     4.2. A sibling.";
        let sections = segment_document(input);

        let titles: Vec<Option<&str>> = sections.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(
            titles,
            vec![
                Some("Trials of the Crown"),
                Some("Trials of the Crown"),
                None,
                None,
            ]
        );
    }

    #[test]
    fn new_heading_replaces_context() {
        let input = "**1.** **Old Gods**\n\
                     1.1. Worship is free.\n\
                     **2.** **New Gods**\n\
                     2.1. Worship is taxed.";
        let sections = segment_document(input);

        assert_eq!(sections[0].title.as_deref(), Some("Old Gods"));
        assert_eq!(sections[1].title.as_deref(), Some("New Gods"));
    }

    #[test]
    fn numbered_line_without_body_is_discarded() {
        // Opens a section but accumulates nothing; finalize drops it, and
        // the non-empty stream then collapses into the fallback section.
        let input = "3. \n**Citations:**";
        let sections = segment_document(input);
        assert_eq!(
            sections,
            vec![Section {
                number: "1".into(),
                title: None,
                body: "3.".into(),
            }]
        );
    }

    #[test]
    fn empty_section_between_laws_is_skipped() {
        let input = "3. \n4. Real content.";
        let sections = segment_document(input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].number, "4");
    }

    #[test]
    fn stray_text_outside_sections_is_dropped() {
        let input = "Preamble chatter.\n1. First law.\nwrapped line.";
        let sections = segment_document(input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "First law.\nwrapped line.");
    }

    #[test]
    fn sections_keep_document_order() {
        let input = "9. Ninth.\n2. Second.\n10. Tenth.";
        let numbers: Vec<String> = segment_document(input)
            .into_iter()
            .map(|s| s.number)
            .collect();
        assert_eq!(numbers, vec!["9", "2", "10"]);
    }

    #[test]
    fn segmentation_is_idempotent() {
        let input = "**4.** **Crimes**\n4.1. Theft is punishable by hanging.\n\
                     4.2. Smuggling is punishable by the Wall.";
        assert_eq!(segment_document(input), segment_document(input));
    }

    #[test]
    fn trailing_whitespace_is_stripped_per_line_breaks_kept() {
        let input = "1. First line.   \n  second line.  ";
        let sections = segment_document(input);
        assert_eq!(sections[0].body, "First line.\n  second line.");
    }

    #[test]
    fn heading_flushes_open_section() {
        let input = "1. Before the heading.\n**2.** **Next Chapter**\n2.1. After.";
        let sections = segment_document(input);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, "Before the heading.");
        assert_eq!(sections[1].title.as_deref(), Some("Next Chapter"));
    }

    #[test]
    fn label_is_derived_from_number() {
        let section = Section {
            number: "4.1.2".into(),
            title: None,
            body: "x".into(),
        };
        assert_eq!(section.label(), "Law 4.1.2");
    }
}

//! Per-line classification, independent of the scan state machine.

use regex::Regex;

/// Classification of a single input line, with the matched parts extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A bold heading line: `**4.1.** **Trials of the Crown**`.
    Heading {
        /// Dotted-decimal number of the heading, e.g. `"4.1"`.
        prefix: String,
        /// Heading title with surrounding whitespace removed.
        title: String,
    },
    /// A numbered content line: `4.1.1. A trial is convened by the Crown.`
    Numbered {
        /// Dotted-decimal number of the new section.
        number: String,
        /// Text after the number, right-trimmed. May be empty.
        rest: String,
    },
    /// Anything else: continuation text, blank lines, extraction noise.
    Other,
}

/// Matches heading and numbered-content lines.
///
/// The two patterns are mutually exclusive; heading is checked first. The
/// heading pattern must cover the entire trimmed line, while the numbered
/// pattern is anchored at the raw line start, so indented numbers do not
/// open sections.
pub struct LineClassifier {
    heading: Regex,
    numbered: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"^\*\*(\d+(?:\.\d+)*)\.\*\*\s+\*\*(.+?)\*\*\s*$")
                .expect("heading pattern is valid"),
            numbered: Regex::new(r"^(\d+(?:\.\d+)*)\.\s+(.*\S)?\s*$")
                .expect("numbered pattern is valid"),
        }
    }

    /// Classify one line without any surrounding context.
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(caps) = self.heading.captures(line.trim()) {
            return LineKind::Heading {
                prefix: caps[1].to_string(),
                title: caps[2].trim().to_string(),
            };
        }

        if let Some(caps) = self.numbered.captures(line) {
            let rest = caps
                .get(2)
                .map(|m| m.as_str().trim_end())
                .unwrap_or_default()
                .to_string();
            return LineKind::Numbered {
                number: caps[1].to_string(),
                rest,
            };
        }

        LineKind::Other
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind {
        LineClassifier::new().classify(line)
    }

    #[test]
    fn heading_line_is_recognized() {
        assert_eq!(
            classify("**4.1.** **Trials of the Crown**"),
            LineKind::Heading {
                prefix: "4.1".into(),
                title: "Trials of the Crown".into(),
            }
        );
    }

    #[test]
    fn heading_allows_surrounding_whitespace() {
        assert_eq!(
            classify("  **2.** **General Provisions**   "),
            LineKind::Heading {
                prefix: "2".into(),
                title: "General Provisions".into(),
            }
        );
    }

    #[test]
    fn heading_with_trailing_garbage_is_not_a_heading() {
        // The whole line must match, so extra text after the closing marker
        // demotes it. It is not a numbered line either (starts with `*`).
        assert_eq!(classify("**4.1.** **Trials** and more"), LineKind::Other);
    }

    #[test]
    fn numbered_line_with_text() {
        assert_eq!(
            classify("4.1.1. A trial is convened by the Crown."),
            LineKind::Numbered {
                number: "4.1.1".into(),
                rest: "A trial is convened by the Crown.".into(),
            }
        );
    }

    #[test]
    fn numbered_line_without_trailing_text() {
        assert_eq!(
            classify("7. "),
            LineKind::Numbered {
                number: "7".into(),
                rest: String::new(),
            }
        );
    }

    #[test]
    fn indented_number_is_not_numbered_content() {
        assert_eq!(classify("   4.1. indented"), LineKind::Other);
    }

    #[test]
    fn number_without_separating_space_is_other() {
        assert_eq!(classify("4.1.No space after period"), LineKind::Other);
    }

    #[test]
    fn plain_text_is_other() {
        assert_eq!(classify("continued detail."), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
        assert_eq!(classify("   "), LineKind::Other);
    }
}

//! Prompt builder: short system message + compact context block.

use doc_store::SectionHit;

/// Default system instructions for grounded answers.
///
/// Keep this short: it consistently improves steering without wasting tokens.
pub const DEFAULT_SYSTEM: &str = "Make sure to answer the question based on the context provided. \
If you don't know the answer, say so.";

/// Build the final user prompt with a labeled context section and char budget.
///
/// The context block preserves the ranking order and shows each hit's
/// section label. Once `max_chars` of context is spent, the remaining hits
/// are dropped.
pub fn build_user_prompt(question: &str, hits: &[SectionHit], max_chars: usize) -> String {
    let mut out = String::new();

    if !hits.is_empty() {
        out.push_str("Context information is below.\n");
        out.push_str("-------------------------------\n");

        let mut budget = max_chars;
        for hit in hits {
            let header = match &hit.section_label {
                Some(label) => format!("[{label}]\n"),
                None => String::new(),
            };
            let text = hit.text.trim();

            if header.len() + text.len() + 1 > budget {
                break;
            }
            out.push_str(&header);
            out.push_str(text);
            out.push('\n');
            budget -= header.len() + text.len() + 1;
        }

        out.push_str("-------------------------------\n");
        out.push_str("Given the context information and not prior knowledge, answer the query.\n");
    }

    out.push_str("Query: ");
    out.push_str(question.trim());
    out.push_str("\nAnswer: ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(label: Option<&str>, text: &str) -> SectionHit {
        SectionHit {
            score: 0.9,
            text: text.into(),
            section_label: label.map(Into::into),
            page: None,
        }
    }

    #[test]
    fn prompt_contains_question_and_context() {
        let prompt = build_user_prompt(
            "what happens to thieves?",
            &[hit(Some("Law 1"), "Theft is punishable by hanging")],
            2000,
        );
        assert!(prompt.contains("Query: what happens to thieves?"));
        assert!(prompt.contains("[Law 1]"));
        assert!(prompt.contains("Theft is punishable by hanging"));
        assert!(prompt.contains("Context information is below."));
    }

    #[test]
    fn no_hits_means_no_context_block() {
        let prompt = build_user_prompt("anything?", &[], 2000);
        assert!(!prompt.contains("Context information"));
        assert!(prompt.starts_with("Query: anything?"));
    }

    #[test]
    fn context_is_clamped_to_budget() {
        let hits = vec![hit(Some("Law 1"), &"x".repeat(50)), hit(Some("Law 2"), "tail")];
        let prompt = build_user_prompt("q", &hits, 60);
        assert!(prompt.contains("Law 1"));
        assert!(!prompt.contains("Law 2"));
    }
}

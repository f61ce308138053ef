//! Response value types exposed to API callers.

use serde::{Deserialize, Serialize};

/// A single evidence snippet attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Label of the evidence origin: a law label, a page label, or `"Unknown"`.
    pub source: String,
    /// Verbatim retrieved text, never truncated.
    pub text: String,
}

/// The response to one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The original question string.
    pub query: String,
    /// Synthesized answer text.
    pub response: String,
    /// Ordered citations, at most top-k of them.
    pub citations: Vec<Citation>,
}

impl QueryResult {
    /// Combines the three parts into a response value. Purely structural,
    /// no transformation of any field.
    pub fn assemble(query: String, response: String, citations: Vec<Citation>) -> Self {
        Self {
            query,
            response,
            citations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_is_structural() {
        let result = QueryResult::assemble(
            "what happens if I steal from the Sept?".into(),
            "Theft is punishable by hanging.".into(),
            vec![Citation {
                source: "Law 1".into(),
                text: "Theft is punishable by hanging".into(),
            }],
        );
        assert_eq!(result.query, "what happens if I steal from the Sept?");
        assert_eq!(result.response, "Theft is punishable by hanging.");
        assert_eq!(result.citations.len(), 1);
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let result = QueryResult::assemble(
            "q".into(),
            "a".into(),
            vec![Citation {
                source: "Law 2".into(),
                text: "Tax evasion is punishable by banishment.".into(),
            }],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "q",
                "response": "a",
                "citations": [
                    { "source": "Law 2", "text": "Tax evasion is punishable by banishment." }
                ]
            })
        );
    }
}

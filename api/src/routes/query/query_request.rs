use serde::Deserialize;

/// Request payload for /query.
#[derive(Debug, Deserialize)]
pub struct QueryBody {
    /// The query string to search the document store,
    /// e.g. "what happens if I steal from the Sept?".
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let body: QueryBody =
            serde_json::from_str(r#"{ "query": "what happens if I steal from the Sept?" }"#)
                .unwrap();
        assert_eq!(body.query, "what happens if I steal from the Sept?");
    }

    #[test]
    fn missing_query_field_is_rejected() {
        assert!(serde_json::from_str::<QueryBody>("{}").is_err());
    }
}

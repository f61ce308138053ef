//! Unified error handling for `ai-llm-service`.
//!
//! One top-level [`AiLlmError`] for the whole crate, with configuration
//! problems grouped in [`ConfigError`]. Provider failures carry enough
//! context (URL, status, body snippet) to be diagnosed from logs alone.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/// Top-level error for the `ai-llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Configuration/validation errors (startup time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Errors detected while building provider clients from configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config names a provider the constructed client cannot serve.
    #[error("invalid provider for this client: expected {0}")]
    InvalidProvider(&'static str),

    /// API key is required by the provider but absent.
    #[error("missing API key for provider {0}")]
    MissingApiKey(&'static str),

    /// The endpoint is empty or does not start with http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Unsupported provider name in `LLM_PROVIDER`.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Model name was empty.
    #[error("model name must not be empty")]
    EmptyModel,
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint(value.to_string()).into())
    }
}

/// Trims a response body down to a log-friendly snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 240;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_string();
    }
    let mut end = MAX;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_validation() {
        assert!(validate_http_endpoint("http://localhost:11434").is_ok());
        assert!(validate_http_endpoint("https://api.openai.com").is_ok());
        assert!(validate_http_endpoint("ftp://nope").is_err());
        assert!(validate_http_endpoint("").is_err());
    }

    #[test]
    fn snippet_is_bounded_and_boundary_safe() {
        let long = "é".repeat(400);
        let snip = make_snippet(&long);
        assert!(snip.len() <= 240 + '…'.len_utf8());
        assert!(snip.ends_with('…'));
        assert_eq!(make_snippet("  short  "), "short");
    }
}

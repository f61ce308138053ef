//! Shared LLM access layer for the law Q&A service.
//!
//! Two provider backends (OpenAI and Ollama) sit behind one configuration
//! type, and [`service_profiles::LlmServiceProfiles`] exposes the two
//! logical roles the application needs: **synthesis** (answer generation)
//! and **embedding** (query/section vectors). Construct once at startup,
//! wrap in `Arc`, and pass clones to dependents.

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;

pub use error_handler::AiLlmError;

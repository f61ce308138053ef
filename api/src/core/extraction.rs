//! Hand-off point from the upstream text-extraction collaborator.
//!
//! PDF-to-markdown extraction happens outside this service; what it leaves
//! behind is a markdown file on disk. Reading that artifact is the only
//! contact this process has with the extraction step.

use std::path::Path;

use tracing::info;

use crate::error_handler::AppError;

/// Reads the extracted markdown document.
///
/// # Errors
/// Returns [`AppError::Document`] when the file cannot be read.
pub fn load_document(path: impl AsRef<Path>) -> Result<String, AppError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Document {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        path = %path.display(),
        bytes = text.len(),
        "loaded extracted document"
    );
    Ok(text)
}

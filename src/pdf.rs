use std::path::Path;

use tracing::info;

use crate::error::IngestResult;

/// Extracts the full text of a PDF, pages concatenated in document order.
///
/// Missing, unreadable, or corrupt files are fatal to the run.
pub fn extract_text(path: &Path) -> IngestResult<String> {
    let text = pdf_extract::extract_text(path)?;
    info!(path = %path.display(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

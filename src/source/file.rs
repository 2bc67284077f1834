//! File-based document source.

use super::Document;
use crate::model::error::InputError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the whole file at `path` as a document.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
pub fn read_file(path: &Path) -> Result<Document, InputError> {
    // Check if file exists before trying to open
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let document = Document::from_text(&text);
    debug!(path = %path.display(), lines = document.len(), "Loaded document from file");
    Ok(document)
}

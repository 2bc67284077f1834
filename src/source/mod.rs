//! Document input sources.
//!
//! The viewer shows a static document, read once at startup:
//! - File loading when a path is given
//! - Stdin when data is piped in

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::read_file;
pub use stdin::{read_lines, read_stdin};

/// A document split into lines, without line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Wrap already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split `text` on line terminators (`\n` or `\r\n`).
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_owned).collect())
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length of every line in columns, for building viewports.
    pub fn line_lengths(&self) -> Vec<usize> {
        self.lines.iter().map(|line| line.chars().count()).collect()
    }
}

/// Load the document from `file`, or from stdin when no file is given.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::NoInput` if no file is given and stdin is a terminal, and
/// `InputError::Io` for read failures.
pub fn load_document(file: Option<PathBuf>) -> Result<Document, InputError> {
    match file {
        Some(path) => read_file(&path),
        None => read_stdin(),
    }
}

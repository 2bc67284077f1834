//! Stdin-based document source for piped input.

use super::Document;
use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use tracing::debug;

/// Read the whole of stdin as a document.
///
/// # Errors
///
/// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
/// This keeps the viewer from blocking on the keyboard when the user forgot
/// to pipe data. Returns `InputError::Io` for read failures.
pub fn read_stdin() -> Result<Document, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    let document = read_lines(stdin.lock())?;
    debug!(lines = document.len(), "Loaded document from stdin");
    Ok(document)
}

/// Read `reader` to EOF, one line at a time.
///
/// # Errors
///
/// Returns `InputError::Io` for I/O errors and invalid UTF-8.
pub fn read_lines<R: Read>(reader: R) -> Result<Document, InputError> {
    let lines = BufReader::new(reader)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document::new(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_until_eof() {
        let data = b"one\ntwo\n";
        let doc = read_lines(&data[..]).unwrap();
        assert_eq!(doc.lines(), ["one", "two"]);
    }

    #[test]
    fn strips_carriage_returns() {
        let data = b"one\r\ntwo\r\n";
        let doc = read_lines(&data[..]).unwrap();
        assert_eq!(doc.lines(), ["one", "two"]);
    }

    #[test]
    fn empty_input_is_empty_document() {
        let doc = read_lines(&b""[..]).unwrap();
        assert!(doc.is_empty());
    }
}

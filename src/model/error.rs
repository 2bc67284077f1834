//! Error types for the dragscroll application shell.
//!
//! The scroll engine itself has no error taxonomy: content boundaries are
//! reported as line remainders and corrected by the caller. Everything here
//! belongs to the impure shell around it (config, logging, document input,
//! terminal).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping all shell failures
//!   - [`ConfigError`] - Config file read/parse/validation failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`InputError`] - Document reading failures (file not found, no input, IO)
//!   - [`TuiError`] - Terminal failures while running the viewer
//!
//! All of these are fatal: they propagate to `main` via `?` and `From`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use dragscroll::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _document = read_document()?;
///     Ok(())
/// }
/// # fn read_document() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is out of range.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The document could not be read.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The terminal viewer failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors encountered when reading the document from a file or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display error and exit (user provided invalid path)
/// - **NoInput**: Display usage help - user must provide file path or pipe stdin
/// - **Io**: Generic I/O failures (permissions, invalid UTF-8) - display and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use dragscroll::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragscroll::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    ///
    /// The `#[from]` attribute enables `?` on `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        fn fails() -> Result<(), AppError> {
            Err(InputError::NoInput)?
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, AppError::InputRead(InputError::NoInput)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn config_error_message_names_field() {
        let err: AppError = ConfigError::InvalidValue {
            field: "motion_scale",
            reason: "must be a positive number, got 0".to_string(),
        }
        .into();
        assert!(err.to_string().contains("motion_scale"));
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: InputError = io.into();
        assert!(err.to_string().contains("bad utf-8"));
    }
}

//! Domain model types (pure).

pub mod error;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use key_action::KeyAction;

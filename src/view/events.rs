//! Terminal event source.
//!
//! The viewer and the drag host read input through [`TerminalEvents`] so
//! tests can replace the terminal with a script.

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Blocking source of terminal events.
pub trait TerminalEvents {
    /// Wait for the next event.
    ///
    /// With `Some(timeout)`, returns `Ok(None)` once the timeout elapses
    /// without input. With `None`, blocks until an event arrives.
    ///
    /// # Errors
    ///
    /// Returns the underlying terminal I/O error.
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>>;
}

/// Events from the real terminal via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl TerminalEvents for CrosstermEvents {
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>> {
        match timeout {
            Some(timeout) => {
                if event::poll(timeout)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            }
            None => event::read().map(Some),
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedEvents;

//! Scrolling engine (pure).
//!
//! Leaves of the drag-scroll pipeline: the velocity curve, whole-line and
//! pixel scroll primitives, and clamp bounds. None of these know about
//! gestures, timers or terminals; they only touch a [`Viewport`].

pub mod clamp;
pub mod curve;
pub mod lines;
pub mod pixels;
pub mod viewport;

// Re-export for convenience
pub use curve::{curve, VelocityCurve};
pub use lines::scroll_by_lines;
pub use pixels::scroll_by_pixels;
pub use viewport::{Cursor, TextViewport, Viewport, ViewportState};

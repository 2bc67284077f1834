//! Drag gesture controller.
//!
//! [`perform_drag_scroll`] is the one entry point: it takes exclusive control
//! of a [`DragHost`] until the gesture ends and reports whether it scrolled.

mod controller;
pub mod host;
pub mod session;

pub use controller::{perform_drag_scroll, perform_drag_scroll_with_fallback};
pub use host::{DragHost, GestureEvent, PointerEvent, TimerHandle};
pub use session::GestureSession;

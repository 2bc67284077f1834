//! Capabilities a host provides to the drag gesture.

use crate::scroll::Viewport;
use std::time::Duration;

/// Identifies one scheduled tick.
///
/// Hosts hand out a fresh handle per [`DragHost::schedule_tick`] call and
/// deliver it back in [`GestureEvent::Tick`] when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a host-chosen id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-chosen id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Input seen by a running gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// The pointer moved; `y` is in the same units as [`DragHost::pointer_y`].
    PointerMove {
        /// Vertical pointer coordinate.
        y: i64,
    },
    /// Restore the pre-gesture view and keep dragging.
    Cancel,
    /// Re-anchor the drag without restoring.
    Pause,
    /// A scheduled tick fired.
    Tick(TimerHandle),
    /// Anything else (button release, unrelated key). Ends the gesture.
    Other,
}

/// The press that starts a gesture, in host pointer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    /// Horizontal pointer coordinate.
    pub x: i64,
    /// Vertical pointer coordinate.
    pub y: i64,
}

impl PointerEvent {
    /// Pointer press at `x`, `y`.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Everything the gesture controller needs from its host.
///
/// The controller holds `&mut` to the host for the whole gesture, so the
/// viewport cannot be scrolled by anything else meanwhile. Timers are
/// cooperative: a tick is only ever observed through [`DragHost::next_event`],
/// on the same thread as input.
pub trait DragHost {
    /// The viewport being scrolled.
    type Viewport: Viewport;

    /// Failure reading input or redrawing.
    type Error;

    /// The viewport under control.
    fn viewport(&mut self) -> &mut Self::Viewport;

    /// Height of one content line in pointer units (pixels).
    fn line_height(&self) -> u32;

    /// Current vertical pointer coordinate.
    fn pointer_y(&self) -> i64;

    /// Block until the next input or the active tick.
    ///
    /// # Errors
    ///
    /// Host-specific input failures; they end the gesture.
    fn next_event(&mut self) -> Result<GestureEvent, Self::Error>;

    /// Arrange for a [`GestureEvent::Tick`] after `delay`.
    fn schedule_tick(&mut self, delay: Duration) -> TimerHandle;

    /// Drop a tick scheduled earlier. Unknown or fired handles are ignored.
    fn cancel_tick(&mut self, handle: TimerHandle);

    /// Redraw now.
    ///
    /// # Errors
    ///
    /// Host-specific rendering failures; they end the gesture.
    fn request_redraw(&mut self) -> Result<(), Self::Error>;

    /// The pointer moved for the first time in this gesture.
    fn notify_gesture_begin(&mut self) {}

    /// A gesture that really scrolled has ended.
    fn notify_gesture_end(&mut self) {}

    /// The viewport ended the gesture at a new position.
    fn notify_viewport_scrolled(&mut self) {}

    /// Make the viewport under `event` the one [`DragHost::viewport`] returns.
    fn focus_pointer_target(&mut self, _event: &PointerEvent) {}
}

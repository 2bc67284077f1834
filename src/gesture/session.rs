//! Per-gesture state.

use crate::scroll::ViewportState;

use super::host::TimerHandle;

/// State of one drag gesture, from press to termination.
///
/// All mutable gesture state lives here as plain fields; the controller
/// passes it around explicitly rather than capturing it in callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    /// View and cursor at gesture start, put back on cancel.
    pub initial: ViewportState,
    /// Cursor column to put back at the end; line motions reset it.
    pub restore_column: Option<usize>,
    /// Pointer coordinate the displacement is measured from.
    pub reference_y: i64,
    /// Current displacement from `reference_y`.
    pub delta: i64,
    /// Displacement at the previous pointer event.
    pub previous_delta: i64,
    /// Fractional motion not yet turned into whole lines.
    pub pixel_accumulator: i64,
    /// The pointer has moved since the gesture started or was last cancelled.
    pub has_scrolled: bool,
    /// Some step actually moved the view. Never cleared.
    pub has_scrolled_real: bool,
    /// The begin notification has fired. Never cleared.
    pub began: bool,
    /// Furthest cursor line forward scrolling may reach.
    pub clamp_bound: Option<usize>,
    /// Tick scheduled and not yet delivered.
    pub active_timer: Option<TimerHandle>,
}

impl GestureSession {
    /// Fresh session anchored at `reference_y`.
    pub fn new(initial: ViewportState, reference_y: i64, clamp_bound: Option<usize>) -> Self {
        let column = initial.cursor.column;
        Self {
            initial,
            restore_column: (column > 0).then_some(column),
            reference_y,
            delta: 0,
            previous_delta: 0,
            pixel_accumulator: 0,
            has_scrolled: false,
            has_scrolled_real: false,
            began: false,
            clamp_bound,
            active_timer: None,
        }
    }

    /// Forget accumulated motion and measure from `reference_y` again.
    pub fn reanchor(&mut self, reference_y: i64) {
        self.reference_y = reference_y;
        self.delta = 0;
        self.previous_delta = 0;
        self.pixel_accumulator = 0;
    }

    /// Add `amount` to the accumulator and take out whole lines of `line_height`.
    ///
    /// The line count truncates toward zero; the accumulator keeps the rest,
    /// with the sign of the motion.
    pub fn take_whole_lines(&mut self, amount: i64, line_height: u32) -> i64 {
        let height = i64::from(line_height.max(1));
        self.pixel_accumulator += amount;
        let lines = self.pixel_accumulator / height;
        self.pixel_accumulator -= lines * height;
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Cursor;

    fn state_with_column(column: usize) -> ViewportState {
        ViewportState {
            line_offset: 3,
            pixel_offset: 0,
            cursor: Cursor::new(3, column),
        }
    }

    #[test]
    fn column_recorded_only_when_nonzero() {
        assert_eq!(GestureSession::new(state_with_column(0), 0, None).restore_column, None);
        assert_eq!(GestureSession::new(state_with_column(6), 0, None).restore_column, Some(6));
    }

    #[test]
    fn take_whole_lines_keeps_fraction() {
        let mut session = GestureSession::new(state_with_column(0), 0, None);
        assert_eq!(session.take_whole_lines(15, 20), 0);
        assert_eq!(session.take_whole_lines(15, 20), 1);
        assert_eq!(session.pixel_accumulator, 10);
    }

    #[test]
    fn take_whole_lines_truncates_toward_zero_backwards() {
        let mut session = GestureSession::new(state_with_column(0), 0, None);
        assert_eq!(session.take_whole_lines(-45, 20), -2);
        assert_eq!(session.pixel_accumulator, -5);
    }

    #[test]
    fn reanchor_clears_motion_but_keeps_flags() {
        let mut session = GestureSession::new(state_with_column(0), 100, None);
        session.delta = 30;
        session.previous_delta = 20;
        session.pixel_accumulator = 7;
        session.has_scrolled_real = true;
        session.began = true;

        session.reanchor(130);

        assert_eq!(session.reference_y, 130);
        assert_eq!((session.delta, session.previous_delta, session.pixel_accumulator), (0, 0, 0));
        assert!(session.has_scrolled_real);
        assert!(session.began);
    }
}

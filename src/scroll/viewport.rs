//! Viewport capability and an in-memory implementation.
//!
//! The scroll primitives only see a [`Viewport`]: a first visible line, a
//! sub-line pixel offset and a cursor that can travel with the view. Hosts
//! implement the handful of required accessors; line motions with boundary
//! remainders are provided on top of them.

/// Cursor location inside the content. Both fields are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Content line the cursor is on.
    pub line: usize,
    /// Column within that line.
    pub column: usize,
}

impl Cursor {
    /// Create a cursor at `line`, `column`.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Value snapshot of the scroll position and cursor.
///
/// Gestures take one at start and put it back verbatim on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// First visible line.
    pub line_offset: usize,
    /// Pixels of the first visible line scrolled out of view.
    pub pixel_offset: u32,
    /// Cursor location.
    pub cursor: Cursor,
}

/// A scrollable window into line-oriented content.
///
/// # Invariants
/// - `line_offset() <= last_line()`
/// - `cursor().line <= last_line()`
/// - `0 <= pixel_offset() < line_height` between scroll operations (the line
///   height is owned by the host, so this is upheld by the scroll primitives
///   rather than by implementors)
pub trait Viewport {
    /// Number of lines in the content.
    fn line_count(&self) -> usize;

    /// Length of `line` in columns, 0 for lines past the end.
    fn line_len(&self, line: usize) -> usize;

    /// Number of fully visible lines.
    fn visible_lines(&self) -> usize;

    /// Lines the cursor keeps from the top and bottom edges while scrolling.
    fn scroll_margin(&self) -> usize;

    /// First visible line.
    fn line_offset(&self) -> usize;

    /// Set the first visible line. Callers keep it within content.
    fn set_line_offset(&mut self, line: usize);

    /// Sub-line scroll in pixels.
    fn pixel_offset(&self) -> u32;

    /// Set the sub-line scroll in pixels.
    fn set_pixel_offset(&mut self, pixels: u32);

    /// Current cursor location.
    fn cursor(&self) -> Cursor;

    /// Move the cursor. Callers keep it within content.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Index of the last content line (0 for empty content).
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Whether the last content line is inside the visible range.
    fn shows_last_line(&self) -> bool {
        self.line_offset() + self.visible_lines() > self.last_line()
    }

    /// Move the view by `lines`, stopping at the content start or last line.
    ///
    /// Returns the part of `lines` that could not be moved, with the sign of
    /// `lines` (0 when fully satisfied).
    fn move_view_lines(&mut self, lines: i64) -> i64 {
        let (target, remainder) = step_line(self.line_offset(), lines, self.last_line());
        self.set_line_offset(target);
        remainder
    }

    /// Move the cursor by `lines` to the start of the target line.
    ///
    /// Returns the unmoved remainder like [`Viewport::move_view_lines`].
    fn move_cursor_lines(&mut self, lines: i64) -> i64 {
        let (target, remainder) = step_line(self.cursor().line, lines, self.last_line());
        self.set_cursor(Cursor::new(target, 0));
        remainder
    }

    /// Put the cursor at `column` on its current line, clamped to the line length.
    fn set_cursor_column(&mut self, column: usize) {
        let line = self.cursor().line;
        let column = column.min(self.line_len(line));
        self.set_cursor(Cursor::new(line, column));
    }

    /// Capture the scroll position and cursor.
    fn snapshot(&self) -> ViewportState {
        ViewportState {
            line_offset: self.line_offset(),
            pixel_offset: self.pixel_offset(),
            cursor: self.cursor(),
        }
    }

    /// Reapply a snapshot taken with [`Viewport::snapshot`].
    fn restore(&mut self, state: &ViewportState) {
        self.set_line_offset(state.line_offset);
        self.set_pixel_offset(state.pixel_offset);
        self.set_cursor(state.cursor);
    }
}

/// Step from line `from` by `lines` within `[0, last]`.
///
/// Returns the landing line and the unsatisfied remainder.
fn step_line(from: usize, lines: i64, last: usize) -> (usize, i64) {
    let from = from as i64;
    let target = (from + lines).clamp(0, last as i64);
    (target as usize, lines - (target - from))
}

/// In-memory viewport over a list of line lengths.
///
/// Used by the terminal viewer for each pane and by tests as the reference
/// content model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextViewport {
    line_lengths: Vec<usize>,
    visible_lines: usize,
    scroll_margin: usize,
    line_offset: usize,
    pixel_offset: u32,
    cursor: Cursor,
}

impl TextViewport {
    /// Create a viewport at the top of the content with the cursor at 0:0.
    pub fn new(line_lengths: Vec<usize>, visible_lines: usize) -> Self {
        Self {
            line_lengths,
            visible_lines,
            scroll_margin: 0,
            line_offset: 0,
            pixel_offset: 0,
            cursor: Cursor::default(),
        }
    }

    /// Builder: set the scroll margin.
    pub fn with_scroll_margin(mut self, margin: usize) -> Self {
        self.scroll_margin = margin;
        self
    }

    /// Builder: start with `line` as the first visible line and the cursor on it.
    pub fn scrolled_to(mut self, line: usize) -> Self {
        let line = line.min(self.last_line());
        self.line_offset = line;
        self.cursor = Cursor::new(line, 0);
        self
    }

    /// Update the number of visible lines (terminal resize).
    pub fn set_visible_lines(&mut self, visible_lines: usize) {
        self.visible_lines = visible_lines;
    }
}

impl Viewport for TextViewport {
    fn line_count(&self) -> usize {
        self.line_lengths.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.line_lengths.get(line).copied().unwrap_or(0)
    }

    fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    fn scroll_margin(&self) -> usize {
        self.scroll_margin
    }

    fn line_offset(&self) -> usize {
        self.line_offset
    }

    fn set_line_offset(&mut self, line: usize) {
        self.line_offset = line;
    }

    fn pixel_offset(&self) -> u32 {
        self.pixel_offset
    }

    fn set_pixel_offset(&mut self, pixels: u32) {
        self.pixel_offset = pixels;
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(lines: usize) -> TextViewport {
        TextViewport::new(vec![8; lines], 10)
    }

    #[test]
    fn move_view_lines_reports_shortfall_at_end() {
        let mut vp = viewport(20).scrolled_to(17);
        let remainder = vp.move_view_lines(5);
        assert_eq!(remainder, 3);
        assert_eq!(vp.line_offset(), 19, "view stops on the last line");
    }

    #[test]
    fn move_view_lines_reports_negative_shortfall_at_start() {
        let mut vp = viewport(20).scrolled_to(2);
        assert_eq!(vp.move_view_lines(-5), -3);
        assert_eq!(vp.line_offset(), 0);
    }

    #[test]
    fn move_cursor_lines_lands_on_line_start() {
        let mut vp = viewport(20);
        vp.set_cursor(Cursor::new(3, 6));
        assert_eq!(vp.move_cursor_lines(2), 0);
        assert_eq!(vp.cursor(), Cursor::new(5, 0));
    }

    #[test]
    fn set_cursor_column_clamps_to_line_length() {
        let mut vp = TextViewport::new(vec![4, 12, 2], 10);
        vp.set_cursor(Cursor::new(2, 0));
        vp.set_cursor_column(9);
        assert_eq!(vp.cursor(), Cursor::new(2, 2));
    }

    #[test]
    fn shows_last_line_depends_on_visible_range() {
        let vp = viewport(20).scrolled_to(9);
        assert!(!vp.shows_last_line(), "lines 9..=18 are visible");
        let vp = viewport(20).scrolled_to(10);
        assert!(vp.shows_last_line(), "lines 10..=19 are visible");
    }

    #[test]
    fn empty_content_never_moves() {
        let mut vp = TextViewport::new(Vec::new(), 10);
        assert_eq!(vp.move_view_lines(3), 3);
        assert_eq!(vp.move_cursor_lines(-2), -2);
        assert_eq!(vp.snapshot(), ViewportState::default());
    }

    #[test]
    fn restore_reapplies_snapshot_verbatim() {
        let mut vp = viewport(50).scrolled_to(12);
        vp.set_pixel_offset(7);
        vp.set_cursor(Cursor::new(14, 3));
        let saved = vp.snapshot();

        vp.move_view_lines(20);
        vp.set_pixel_offset(1);
        vp.move_cursor_lines(-4);
        vp.restore(&saved);

        assert_eq!(vp.snapshot(), saved);
    }
}

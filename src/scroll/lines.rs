//! Whole-line scrolling with boundary remainders.

use super::viewport::Viewport;

/// Scroll `viewport` by `lines`, optionally carrying the cursor along.
///
/// With `also_move_cursor`, the cursor moves first; when the content refuses
/// part of that move the view only moves as far as the cursor did, keeping the
/// cursor anchored relative to the view. If the view itself is then cut short
/// by a content boundary, the cursor is moved back by the view's shortfall.
///
/// Returns the unsatisfied part of `lines` (same sign, 0 when fully
/// satisfied). Hitting a boundary is not an error; callers react to the
/// remainder.
pub fn scroll_by_lines<V>(viewport: &mut V, lines: i64, also_move_cursor: bool) -> i64
where
    V: Viewport + ?Sized,
{
    if lines == 0 {
        return 0;
    }

    let mut cursor_remainder = 0;
    let mut view_lines = lines;
    if also_move_cursor {
        cursor_remainder = viewport.move_cursor_lines(lines);
        view_lines = lines - cursor_remainder;
    }

    let mut view_remainder = 0;
    if view_lines != 0 {
        view_remainder = viewport.move_view_lines(view_lines);
        if also_move_cursor && view_remainder != 0 {
            viewport.move_cursor_lines(-view_remainder);
        }
    }

    cursor_remainder + view_remainder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::viewport::{Cursor, TextViewport};

    fn viewport() -> TextViewport {
        TextViewport::new(vec![10; 100], 10)
    }

    #[test]
    fn zero_lines_is_a_noop() {
        let mut vp = viewport().scrolled_to(5);
        vp.set_cursor(Cursor::new(7, 3));
        let before = vp.clone();
        assert_eq!(scroll_by_lines(&mut vp, 0, true), 0);
        assert_eq!(vp, before, "column must not be reset either");
    }

    #[test]
    fn forward_scroll_moves_view_and_cursor_together() {
        let mut vp = viewport().scrolled_to(10);
        assert_eq!(scroll_by_lines(&mut vp, 4, true), 0);
        assert_eq!(vp.line_offset(), 14);
        assert_eq!(vp.cursor().line, 14);
    }

    #[test]
    fn backward_scroll_without_cursor_leaves_cursor() {
        let mut vp = viewport().scrolled_to(10);
        assert_eq!(scroll_by_lines(&mut vp, -4, false), 0);
        assert_eq!(vp.line_offset(), 6);
        assert_eq!(vp.cursor().line, 10);
    }

    #[test]
    fn three_lines_left_returns_remainder_two() {
        let mut vp = viewport().scrolled_to(96);
        assert_eq!(scroll_by_lines(&mut vp, 5, true), 2);
        assert_eq!(vp.line_offset(), 99);
        assert_eq!(vp.cursor().line, 99);
    }

    #[test]
    fn view_only_boundary_returns_exact_shortfall() {
        let mut vp = viewport().scrolled_to(97);
        assert_eq!(scroll_by_lines(&mut vp, 10, false), 8);
        assert_eq!(vp.line_offset(), 99, "advanced by exactly the 2 remaining lines");
    }

    #[test]
    fn cursor_shortfall_limits_view_move() {
        // Cursor sits 5 lines below the view start: it hits the end first.
        let mut vp = viewport().scrolled_to(90);
        vp.set_cursor(Cursor::new(95, 0));
        assert_eq!(scroll_by_lines(&mut vp, 6, true), 2);
        assert_eq!(vp.cursor().line, 99);
        assert_eq!(vp.line_offset(), 94, "view follows only the 4 lines the cursor moved");
    }

    #[test]
    fn view_shortfall_resyncs_cursor() {
        // Cursor further down the content can move further back than the view.
        let mut vp = viewport().scrolled_to(2);
        vp.set_cursor(Cursor::new(8, 0));
        assert_eq!(scroll_by_lines(&mut vp, -5, true), -3);
        assert_eq!(vp.line_offset(), 0);
        assert_eq!(vp.cursor().line, 6, "cursor moved back 5 then forward 3");
    }

    #[test]
    fn scrolling_at_start_backward_is_fully_refused() {
        let mut vp = viewport();
        assert_eq!(scroll_by_lines(&mut vp, -3, true), -3);
        assert_eq!(vp.line_offset(), 0);
        assert_eq!(vp.cursor().line, 0);
    }
}

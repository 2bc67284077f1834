//! Clamp-to-content bounds and scroll margin correction.
//!
//! The clamp bound is the furthest cursor line a forward drag may reach. It is
//! computed once when the gesture starts; each forward step that goes past it
//! is pulled back by exactly the overshoot.

use super::lines::scroll_by_lines;
use super::viewport::{Cursor, Viewport};

/// Furthest cursor line a forward drag may reach, or `None` for empty content.
///
/// When the last content line is already visible no further forward scroll
/// is allowed: the bound is the cursor's own line, or the top scroll margin
/// if the cursor sits above it and the view is not at the content start
/// (where [`constrain_cursor_to_margin`] will move it). Otherwise the bound puts
/// the last content line on the bottom row of the view, given that the
/// cursor stays `max(cursor_rel, margin)` lines below the view start while
/// scrolling (it is pushed down to the top scroll margin if it sits above it).
pub fn compute_bound<V>(viewport: &V) -> Option<usize>
where
    V: Viewport + ?Sized,
{
    if viewport.line_count() == 0 {
        return None;
    }

    let cursor = viewport.cursor();
    if viewport.shows_last_line() {
        let line_offset = viewport.line_offset();
        if line_offset == 0 {
            return Some(cursor.line);
        }
        let margin_line = line_offset + viewport.scroll_margin();
        return Some(cursor.line.max(margin_line).min(viewport.last_line()));
    }

    let cursor_rel = cursor.line.saturating_sub(viewport.line_offset());
    let pinned_rel = cursor_rel.max(viewport.scroll_margin());
    let bound = (viewport.last_line() + 1 + pinned_rel).saturating_sub(viewport.visible_lines());
    Some(bound.min(viewport.last_line()))
}

/// Pull the view back if it has scrolled past `bound`.
///
/// Being on the bound line with a nonzero pixel offset also counts as past
/// it. The pixel offset is reset and the view and cursor move back by exactly
/// the overshoot in lines.
///
/// Returns whether a correction was applied.
pub fn enforce<V>(viewport: &mut V, bound: usize) -> bool
where
    V: Viewport + ?Sized,
{
    let line = viewport.cursor().line;
    if line < bound || (line == bound && viewport.pixel_offset() == 0) {
        return false;
    }

    viewport.set_pixel_offset(0);
    let overshoot = (line - bound) as i64;
    scroll_by_lines(viewport, -overshoot, true);
    true
}

/// Move a cursor sitting inside the top scroll margin down to the margin.
///
/// Runs before the first real scroll of a smooth drag: a cursor above the
/// margin would otherwise be dragged along by the host's own margin
/// handling, jumping the view by a line. At the content start there is no
/// margin to respect.
///
/// Returns whether the cursor moved.
pub fn constrain_cursor_to_margin<V>(viewport: &mut V) -> bool
where
    V: Viewport + ?Sized,
{
    let line_offset = viewport.line_offset();
    if line_offset == 0 {
        return false;
    }

    let top = (line_offset + viewport.scroll_margin()).min(viewport.last_line());
    let cursor = viewport.cursor();
    if cursor.line >= top {
        return false;
    }

    viewport.set_cursor(Cursor::new(top, 0));
    viewport.set_cursor_column(cursor.column);
    true
}

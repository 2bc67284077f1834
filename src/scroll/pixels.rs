//! Sub-line (pixel) scrolling on top of whole-line scrolling.

use super::lines::scroll_by_lines;
use super::viewport::Viewport;

/// Scroll `viewport` by `delta_px` pixels.
///
/// The pixel offset plus the delta is split into whole lines, which are
/// delegated to [`scroll_by_lines`], and the offset into the line the view
/// lands on. When the line scroll hits a content boundary the view is pinned
/// at that edge with a zero pixel offset.
///
/// Returns the line remainder reported by [`scroll_by_lines`] (0 when no
/// boundary was crossed or every crossing succeeded).
///
/// # Invariant
/// `0 <= pixel_offset < line_height` after every call.
pub fn scroll_by_pixels<V>(
    viewport: &mut V,
    line_height: u32,
    delta_px: i64,
    also_move_cursor: bool,
) -> i64
where
    V: Viewport + ?Sized,
{
    if delta_px == 0 {
        return 0;
    }

    let (lines, mut offset) = split_lines(viewport.pixel_offset(), delta_px, line_height);

    let mut remainder = 0;
    if lines != 0 {
        remainder = scroll_by_lines(viewport, lines, also_move_cursor);
        if remainder != 0 {
            offset = 0;
        }
    }

    viewport.set_pixel_offset(offset);
    remainder
}

/// Split `offset + delta` into line boundaries crossed and the new offset.
///
/// Forward motion counts boundaries with a truncating division of the new
/// position. Backward motion flips the offset to "distance to the end of the
/// line" so the same truncating division counts boundaries crossed going up;
/// the result is flipped back afterwards. Either way the offset is measured
/// from the start of the landing line and lies in `[0, line_height)`.
fn split_lines(offset: u32, delta: i64, line_height: u32) -> (i64, u32) {
    let height = i64::from(line_height.max(1));
    let offset = i64::from(offset);

    if delta >= 0 {
        let next = offset + delta;
        (next / height, (next % height) as u32)
    } else {
        let flipped = (height - 1 - offset) - delta;
        let lines = flipped / height;
        let landed = height - 1 - flipped % height;
        (-lines, landed as u32)
    }
}

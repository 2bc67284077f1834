//! Document pane: a viewport plus the screen area it is drawn in.

use crate::model::KeyAction;
use crate::scroll::{scroll_by_lines, Cursor, TextViewport, Viewport, ViewportState};
use crate::source::Document;
use crate::view::styles::PaneStyles;
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// One scrollable view of the document.
#[derive(Debug, Clone)]
pub struct Pane {
    viewport: TextViewport,
    area: Rect,
}

impl Pane {
    /// Pane over `document` at its first line, not yet laid out.
    pub fn new(document: &Document, scroll_margin: usize) -> Self {
        Self {
            viewport: TextViewport::new(document.line_lengths(), 0)
                .with_scroll_margin(scroll_margin),
            area: Rect::default(),
        }
    }

    /// The pane's viewport.
    pub fn viewport(&self) -> &TextViewport {
        &self.viewport
    }

    /// The pane's viewport, mutably.
    pub fn viewport_mut(&mut self) -> &mut TextViewport {
        &mut self.viewport
    }

    /// Screen area including the border.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen area of the text, inside the border.
    pub fn inner(&self) -> Rect {
        Block::bordered().inner(self.area)
    }

    /// Move the pane to `area` and size the viewport to its inner height.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        let visible = usize::from(self.inner().height);
        self.viewport.set_visible_lines(visible);
    }

    /// Whether the cell at `column`, `row` belongs to this pane.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Apply a scrolling key action. Returns whether the action applies to panes.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        let page = self.viewport.visible_lines().max(1) as i64;
        self.viewport.set_pixel_offset(0);
        match action {
            KeyAction::ScrollDown => {
                scroll_by_lines(&mut self.viewport, 1, true);
            }
            KeyAction::ScrollUp => {
                scroll_by_lines(&mut self.viewport, -1, true);
            }
            KeyAction::PageDown => {
                scroll_by_lines(&mut self.viewport, page, true);
            }
            KeyAction::PageUp => {
                scroll_by_lines(&mut self.viewport, -page, true);
            }
            KeyAction::ScrollToTop => self.viewport.restore(&ViewportState::default()),
            KeyAction::ScrollToBottom => {
                let last = self.viewport.last_line();
                let top = (last + 1).saturating_sub(self.viewport.visible_lines());
                self.viewport.restore(&ViewportState {
                    line_offset: top,
                    pixel_offset: 0,
                    cursor: Cursor::new(last, 0),
                });
            }
            _ => return false,
        }
        true
    }

    /// Put the cursor on the line shown at screen `row` and `column`.
    ///
    /// Rows outside the text area or past the end of the document are
    /// ignored. Returns whether the cursor moved.
    pub fn place_cursor_at(&mut self, column: u16, row: u16) -> bool {
        let inner = self.inner();
        if !inner.contains(Position::new(column, row)) {
            return false;
        }
        let line = self.viewport.line_offset() + usize::from(row - inner.y);
        if line > self.viewport.last_line() || self.viewport.line_count() == 0 {
            return false;
        }
        self.viewport.set_cursor(Cursor::new(line, 0));
        self.viewport.set_cursor_column(usize::from(column - inner.x));
        true
    }

    /// Title shown in the border: pane name, cursor position and scroll offset.
    pub fn title(&self, index: usize) -> String {
        let cursor = self.viewport.cursor();
        format!(
            " Pane {} | line {}:{} | top {} +{}px ",
            index + 1,
            cursor.line + 1,
            cursor.column,
            self.viewport.line_offset() + 1,
            self.viewport.pixel_offset()
        )
    }
}

/// Draw `pane` with the visible part of `document`.
pub fn render_pane(
    frame: &mut Frame,
    pane: &Pane,
    index: usize,
    document: &Document,
    focused: bool,
    styles: &PaneStyles,
) {
    let viewport = pane.viewport();
    let border_style = if focused {
        styles.focused_border
    } else {
        styles.border
    };
    let block = Block::bordered()
        .title(pane.title(index))
        .border_style(border_style);

    let cursor_line = viewport.cursor().line;
    let lines: Vec<Line> = document
        .lines()
        .iter()
        .enumerate()
        .skip(viewport.line_offset())
        .take(viewport.visible_lines())
        .map(|(number, text)| {
            let line = Line::from(Span::raw(text.as_str()));
            if number == cursor_line {
                line.style(styles.cursor_line)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), pane.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(lines: usize) -> Pane {
        let document = Document::new((0..lines).map(|n| format!("line {n}")).collect());
        let mut pane = Pane::new(&document, 0);
        pane.set_area(Rect::new(0, 0, 40, 12));
        pane
    }

    #[test]
    fn set_area_sizes_viewport_inside_border() {
        assert_eq!(pane(100).viewport().visible_lines(), 10);
    }

    #[test]
    fn scroll_down_moves_view_and_cursor() {
        let mut pane = pane(100);
        assert!(pane.apply(KeyAction::ScrollDown));
        assert_eq!(pane.viewport().line_offset(), 1);
        assert_eq!(pane.viewport().cursor().line, 1);
    }

    #[test]
    fn page_down_moves_one_screen() {
        let mut pane = pane(100);
        pane.apply(KeyAction::PageDown);
        assert_eq!(pane.viewport().line_offset(), 10);
    }

    #[test]
    fn scroll_to_bottom_shows_last_line_on_bottom_row() {
        let mut pane = pane(100);
        pane.apply(KeyAction::ScrollToBottom);
        assert_eq!(pane.viewport().line_offset(), 90);
        assert_eq!(pane.viewport().cursor().line, 99);
        assert!(pane.viewport().shows_last_line());
    }

    #[test]
    fn scroll_to_bottom_of_short_document_stays_at_top() {
        let mut pane = pane(4);
        pane.apply(KeyAction::ScrollToBottom);
        assert_eq!(pane.viewport().line_offset(), 0);
        assert_eq!(pane.viewport().cursor().line, 3);
    }

    #[test]
    fn non_scroll_actions_are_not_handled() {
        let mut pane = pane(100);
        assert!(!pane.apply(KeyAction::Quit));
        assert!(!pane.apply(KeyAction::CancelDrag));
    }

    #[test]
    fn place_cursor_maps_row_to_visible_line() {
        let mut pane = pane(100);
        pane.apply(KeyAction::PageDown);
        // Row 1 is the first text row inside the border.
        assert!(pane.place_cursor_at(4, 4));
        assert_eq!(pane.viewport().cursor(), Cursor::new(13, 3));
    }

    #[test]
    fn place_cursor_ignores_border_and_rows_past_end() {
        let mut pane = pane(3);
        assert!(!pane.place_cursor_at(4, 0), "top border");
        assert!(!pane.place_cursor_at(4, 6), "no line under the row");
        assert_eq!(pane.viewport().cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn title_reports_cursor_and_offsets() {
        let mut pane = pane(100);
        pane.viewport_mut().set_pixel_offset(5);
        assert_eq!(pane.title(0), " Pane 1 | line 1:0 | top 1 +5px ");
    }
}

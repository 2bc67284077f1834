//! Side-by-side pane layout with a status bar.
//!
//! Pure layout logic: areas are computed from the terminal size and stored
//! on the panes before every draw, so mouse hit testing and rendering agree.

use crate::view::pane::{render_pane, Pane};
use crate::view::styles::PaneStyles;
use crate::scroll::Viewport;
use crate::source::Document;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Left and right pane.
    pub panes: [Rect; 2],
    /// Status bar (1 line).
    pub status: Rect,
}

/// Split `area` into two equal panes above a one-line status bar.
pub fn calculate_layout(area: Rect) -> ScreenLayout {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar (1 line)
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical_chunks[0]);

    ScreenLayout {
        panes: [horizontal_chunks[0], horizontal_chunks[1]],
        status: vertical_chunks[1],
    }
}

/// What the status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    /// Index of the focused pane.
    pub active: usize,
    /// A drag gesture is running.
    pub dragging: bool,
    /// Last gesture or input message, if any.
    pub message: Option<&'a str>,
}

/// Render both panes and the status bar.
pub fn render_layout(
    frame: &mut Frame,
    panes: &[Pane; 2],
    document: &Document,
    status: StatusInfo<'_>,
    styles: &PaneStyles,
) {
    for (index, pane) in panes.iter().enumerate() {
        render_pane(frame, pane, index, document, index == status.active, styles);
    }

    let status_area = calculate_layout(frame.area()).status;
    render_status_bar(frame, status_area, &panes[status.active], status, styles);
}

/// Render the status bar for the focused pane.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    pane: &Pane,
    status: StatusInfo<'_>,
    styles: &PaneStyles,
) {
    let text = status_text(pane, status);
    let style = if status.dragging {
        styles.status_dragging
    } else {
        styles.status
    };
    frame.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

/// Status bar contents.
fn status_text(pane: &Pane, status: StatusInfo<'_>) -> String {
    let viewport = pane.viewport();
    let mode = if status.dragging { "DRAG" } else { "VIEW" };
    let mut text = format!(
        " {mode} | pane {} | line {}/{} +{}px",
        status.active + 1,
        viewport.line_offset() + 1,
        viewport.line_count(),
        viewport.pixel_offset()
    );
    if let Some(message) = status.message {
        text.push_str(" | ");
        text.push_str(message);
    }
    if status.dragging {
        text.push_str(" | Esc cancel  Space pause");
    } else {
        text.push_str(" | middle-drag scroll  Tab pane  q quit");
    }
    text
}

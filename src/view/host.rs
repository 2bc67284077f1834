//! Terminal implementation of the drag host.
//!
//! Mouse rows become pointer pixels (`row * line_height_px`), so the gesture
//! sees the same units a pixel-addressed host would. Ticks are cooperative:
//! while one is pending, reads wait with a timeout up to its deadline and an
//! elapsed timeout is delivered as the tick.

use crate::gesture::{DragHost, GestureEvent, PointerEvent, TimerHandle};
use crate::model::KeyAction;
use crate::scroll::{TextViewport, Viewport};
use crate::view::events::TerminalEvents;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::backend::Backend;
use std::time::{Duration, Instant};
use tracing::debug;

/// Drives one gesture against the focused pane of a [`TuiApp`].
pub struct TerminalHost<'a, B, E>
where
    B: Backend,
    E: TerminalEvents,
{
    app: &'a mut TuiApp<B, E>,
    pointer_y: i64,
    pending_tick: Option<(TimerHandle, Instant)>,
    next_timer_id: u64,
}

impl<'a, B, E> TerminalHost<'a, B, E>
where
    B: Backend,
    E: TerminalEvents,
{
    /// Host for a gesture pressed at `pointer_y`.
    pub fn new(app: &'a mut TuiApp<B, E>, pointer_y: i64) -> Self {
        Self {
            app,
            pointer_y,
            pending_tick: None,
            next_timer_id: 0,
        }
    }

    /// Plain-click fallback: move the cursor of the focused pane to the press.
    pub fn place_cursor_at_pointer(&mut self, event: &PointerEvent) {
        let (column, row) = self.cell_of(event);
        let active = self.app.active;
        if self.app.panes[active].place_cursor_at(column, row) {
            debug!(column, row, "Click placed cursor");
        }
    }

    fn cell_of(&self, event: &PointerEvent) -> (u16, u16) {
        let line_height = i64::from(self.app.config.line_height_px.max(1));
        let column = u16::try_from(event.x).unwrap_or(u16::MAX);
        let row = u16::try_from(event.y / line_height).unwrap_or(u16::MAX);
        (column, row)
    }

    fn row_to_pixels(&self, row: u16) -> i64 {
        i64::from(row) * i64::from(self.app.config.line_height_px)
    }

    /// Map a terminal event to a gesture event, or `None` to keep waiting.
    fn translate(&mut self, event: Event) -> Result<Option<GestureEvent>, TuiError> {
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Drag(_) => {
                    self.pointer_y = self.row_to_pixels(mouse.row);
                    Ok(Some(GestureEvent::PointerMove { y: self.pointer_y }))
                }
                MouseEventKind::Moved => Ok(None),
                MouseEventKind::Up(MouseButton::Middle) => Ok(Some(GestureEvent::Other)),
                _ => {
                    self.app.requeue(event);
                    Ok(Some(GestureEvent::Other))
                }
            },
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                match self.app.key_bindings.get(key) {
                    Some(KeyAction::CancelDrag) => Ok(Some(GestureEvent::Cancel)),
                    Some(KeyAction::PauseDrag) => Ok(Some(GestureEvent::Pause)),
                    _ => {
                        self.app.requeue(event);
                        Ok(Some(GestureEvent::Other))
                    }
                }
            }
            Event::Resize(width, height) => {
                self.app.handle_resize(width, height);
                self.app.draw()?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl<B, E> DragHost for TerminalHost<'_, B, E>
where
    B: Backend,
    E: TerminalEvents,
{
    type Viewport = TextViewport;
    type Error = TuiError;

    fn viewport(&mut self) -> &mut TextViewport {
        let active = self.app.active;
        self.app.panes[active].viewport_mut()
    }

    fn line_height(&self) -> u32 {
        self.app.config.line_height_px
    }

    fn pointer_y(&self) -> i64 {
        self.pointer_y
    }

    fn next_event(&mut self) -> Result<GestureEvent, TuiError> {
        loop {
            let timeout = self
                .pending_tick
                .map(|(_, deadline)| deadline.saturating_duration_since(Instant::now()));

            match self.app.events.next_event(timeout)? {
                Some(event) => {
                    if let Some(gesture_event) = self.translate(event)? {
                        return Ok(gesture_event);
                    }
                }
                None => {
                    if let Some((handle, _)) = self.pending_tick.take() {
                        return Ok(GestureEvent::Tick(handle));
                    }
                }
            }
        }
    }

    fn schedule_tick(&mut self, delay: Duration) -> TimerHandle {
        self.next_timer_id += 1;
        let handle = TimerHandle::new(self.next_timer_id);
        self.pending_tick = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel_tick(&mut self, handle: TimerHandle) {
        if matches!(self.pending_tick, Some((pending, _)) if pending == handle) {
            self.pending_tick = None;
        }
    }

    fn request_redraw(&mut self) -> Result<(), TuiError> {
        self.app.draw()
    }

    fn notify_gesture_begin(&mut self) {
        self.app.set_message("dragging");
    }

    fn notify_gesture_end(&mut self) {
        debug!(pane = self.app.active, "Gesture ended");
    }

    fn notify_viewport_scrolled(&mut self) {
        let line = self.app.panes[self.app.active].viewport().line_offset() + 1;
        self.app.set_message(format!("scrolled to line {line}"));
    }

    fn focus_pointer_target(&mut self, event: &PointerEvent) {
        let (column, row) = self.cell_of(event);
        if let Some(index) = self.app.pane_at(column, row) {
            if index != self.app.active {
                debug!(from = self.app.active, to = index, "Focus follows pointer");
                self.app.active = index;
            }
        }
    }
}

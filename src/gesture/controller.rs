//! Drag gesture state machine.
//!
//! A gesture starts dragging as soon as it is invoked and runs until an input
//! that is not a pointer move, tick, cancel or pause arrives:
//!
//! ```text
//! Idle -> Dragging -> Committed   (view moved; keep it)
//!                  -> Cancelled   (view back where it started)
//! ```
//!
//! Pointer moves and timer ticks both funnel into [`ActiveGesture::step`],
//! which applies one scroll increment from the current displacement. A tick
//! is only scheduled after a step completes, and any pending tick is
//! cancelled before a pointer move applies its own step, so steps never
//! overlap.

use crate::config::{DragScrollConfig, ScrollStyle};
use crate::scroll::{clamp, scroll_by_lines, scroll_by_pixels, VelocityCurve, Viewport};
use tracing::{debug, info};

use super::host::{DragHost, GestureEvent, PointerEvent, TimerHandle};
use super::session::GestureSession;

/// Line motions made by the gesture carry the cursor with the view.
const MOVE_CURSOR: bool = true;

/// Run one drag gesture to completion.
///
/// Returns `Ok(true)` iff the view really scrolled at some point during the
/// gesture. Hosts use `false` to fall back to a plain click.
///
/// # Errors
///
/// Propagates host input/redraw failures. The active tick is cancelled on
/// every exit path, including errors.
pub fn perform_drag_scroll<H: DragHost>(
    host: &mut H,
    config: &DragScrollConfig,
    event: &PointerEvent,
) -> Result<bool, H::Error> {
    if config.follow_pointer {
        host.focus_pointer_target(event);
    }

    let mut gesture = ActiveGesture::start(host, config);
    gesture.run()
}

/// Run a gesture and call `fallback` if it did not scroll.
///
/// Returns whether the gesture scrolled.
///
/// # Errors
///
/// Propagates host failures from the gesture; `fallback` is not run then.
pub fn perform_drag_scroll_with_fallback<H, F>(
    host: &mut H,
    config: &DragScrollConfig,
    event: &PointerEvent,
    fallback: F,
) -> Result<bool, H::Error>
where
    H: DragHost,
    F: FnOnce(&mut H),
{
    let scrolled = perform_drag_scroll(host, config, event)?;
    if !scrolled {
        debug!("Drag did not scroll, running fallback");
        fallback(host);
    }
    Ok(scrolled)
}

/// A gesture in the `Dragging` state.
///
/// Owns the session and exclusive access to the host. Dropping it cancels
/// the pending tick, so no scheduled callback outlives the gesture.
struct ActiveGesture<'a, H: DragHost> {
    host: &'a mut H,
    config: &'a DragScrollConfig,
    curve: VelocityCurve,
    session: GestureSession,
}

impl<'a, H: DragHost> ActiveGesture<'a, H> {
    fn start(host: &'a mut H, config: &'a DragScrollConfig) -> Self {
        let viewport = host.viewport();
        let initial = viewport.snapshot();
        let clamp_bound = if config.clamp {
            clamp::compute_bound(&*viewport)
        } else {
            None
        };
        let reference_y = host.pointer_y();

        debug!(
            ?initial,
            reference_y,
            ?clamp_bound,
            style = config.style.as_str(),
            "Drag gesture started"
        );

        Self {
            host,
            config,
            curve: VelocityCurve::from_config(config),
            session: GestureSession::new(initial, reference_y, clamp_bound),
        }
    }

    fn run(&mut self) -> Result<bool, H::Error> {
        loop {
            match self.host.next_event()? {
                GestureEvent::PointerMove { y } => self.on_pointer_move(y)?,
                GestureEvent::Tick(handle) => self.on_tick(handle)?,
                GestureEvent::Cancel => self.on_cancel()?,
                GestureEvent::Pause => self.on_pause()?,
                GestureEvent::Other => break,
            }
        }
        self.finish()
    }

    fn on_pointer_move(&mut self, y: i64) -> Result<(), H::Error> {
        let delta = y - self.session.reference_y;
        self.session.delta = delta;

        if delta == 0 {
            // Nothing to animate; a gesture that never leaves here is a click.
            self.stop_timer();
            self.session.previous_delta = 0;
            return Ok(());
        }

        if self.session.previous_delta == 0 {
            if self.uses_pixel_offset() {
                clamp::constrain_cursor_to_margin(self.host.viewport());
            }
            if !self.session.began {
                self.session.began = true;
                self.host.notify_gesture_begin();
            }
        }
        self.session.previous_delta = delta;
        self.session.has_scrolled = true;

        self.stop_timer();
        self.step()?;
        self.schedule_tick();
        Ok(())
    }

    fn on_tick(&mut self, handle: TimerHandle) -> Result<(), H::Error> {
        if self.session.active_timer != Some(handle) {
            debug!(handle = handle.id(), "Ignoring stale tick");
            return Ok(());
        }
        self.session.active_timer = None;

        if self.session.delta != 0 {
            self.step()?;
            self.schedule_tick();
        }
        Ok(())
    }

    fn on_cancel(&mut self) -> Result<(), H::Error> {
        self.session.has_scrolled = false;
        self.stop_timer();
        self.snap_to_line();
        self.session.reanchor(self.host.pointer_y());

        let initial = self.session.initial;
        self.host.viewport().restore(&initial);
        debug!(?initial, "Drag cancelled, view restored");
        self.host.request_redraw()
    }

    fn on_pause(&mut self) -> Result<(), H::Error> {
        self.stop_timer();
        let before = self.host.viewport().snapshot();
        self.snap_to_line();
        self.session.reanchor(self.host.pointer_y());

        debug!(reference_y = self.session.reference_y, "Drag paused");
        if self.host.viewport().snapshot() != before {
            self.host.request_redraw()?;
        }
        Ok(())
    }

    /// Apply one scroll increment for the current displacement.
    fn step(&mut self) -> Result<(), H::Error> {
        let delta = self.session.delta;
        let line_height = self.host.line_height();
        let before = self.host.viewport().snapshot();

        match self.config.style {
            ScrollStyle::Line => {
                let lines = self.session.take_whole_lines(delta, line_height);
                scroll_by_lines(self.host.viewport(), lines, MOVE_CURSOR);
            }
            ScrollStyle::LineByPixel => {
                let pixels = self.curve.apply(delta, line_height);
                if self.config.smooth {
                    let viewport = self.host.viewport();
                    scroll_by_pixels(viewport, line_height, pixels, MOVE_CURSOR);
                    if viewport.cursor().line >= viewport.last_line() {
                        viewport.set_pixel_offset(0);
                    }
                } else {
                    let lines = self.session.take_whole_lines(pixels, line_height);
                    scroll_by_lines(self.host.viewport(), lines, MOVE_CURSOR);
                }
            }
        }

        if self.config.clamp && delta > 0 {
            if let Some(bound) = self.session.clamp_bound {
                clamp::enforce(self.host.viewport(), bound);
            }
        }

        let after = self.host.viewport().snapshot();
        if after != before {
            self.session.has_scrolled_real = true;
            debug!(
                delta,
                line_offset = after.line_offset,
                pixel_offset = after.pixel_offset,
                "Drag step"
            );
            self.host.request_redraw()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<bool, H::Error> {
        let before = self.host.viewport().snapshot();
        self.snap_to_line();
        self.stop_timer();

        let initial = self.session.initial;
        let viewport = self.host.viewport();
        if viewport.line_offset() == initial.line_offset {
            viewport.restore(&initial);
            self.session.has_scrolled = false;
        } else if self.session.has_scrolled {
            if let Some(column) = self.session.restore_column {
                viewport.set_cursor_column(column);
            }
        }

        let scrolled = self.session.has_scrolled_real;
        if scrolled {
            let line_offset = self.host.viewport().line_offset();
            info!(
                from = initial.line_offset,
                to = line_offset,
                "Drag gesture scrolled"
            );
            self.host.notify_gesture_end();
            self.host.notify_viewport_scrolled();
        } else {
            debug!("Drag gesture ended without scrolling");
        }

        if scrolled || self.host.viewport().snapshot() != before {
            self.host.request_redraw()?;
        }
        Ok(scrolled)
    }

    /// Whether the style in use keeps a sub-line pixel offset.
    fn uses_pixel_offset(&self) -> bool {
        self.config.style == ScrollStyle::LineByPixel && self.config.smooth
    }

    /// Round a partial pixel offset to the nearest whole line.
    fn snap_to_line(&mut self) {
        let line_height = self.host.line_height();
        let viewport = self.host.viewport();
        let offset = viewport.pixel_offset();
        if offset == 0 {
            return;
        }
        if offset.saturating_mul(2) >= line_height {
            scroll_by_lines(viewport, 1, MOVE_CURSOR);
        }
        viewport.set_pixel_offset(0);
    }

    fn schedule_tick(&mut self) {
        let handle = self.host.schedule_tick(self.config.tick_interval);
        self.session.active_timer = Some(handle);
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.session.active_timer.take() {
            self.host.cancel_tick(handle);
        }
    }
}

impl<H: DragHost> Drop for ActiveGesture<'_, H> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

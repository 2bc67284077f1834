//! Scripted drag host for gesture tests.
//!
//! Plays back a fixed list of input steps against a [`TextViewport`] and
//! records every timer, redraw and notification the controller asks for, so
//! tests can assert on the full protocol rather than only the final view.

use crate::gesture::{DragHost, GestureEvent, PointerEvent, TimerHandle};
use crate::scroll::{TextViewport, Viewport};
use std::collections::VecDeque;
use std::time::Duration;

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pointer moves to absolute `y`.
    Move(i64),
    /// The pending tick fires. Skipped when no tick is pending.
    Tick,
    /// Deliver a tick with an arbitrary handle id.
    RawTick(u64),
    /// Cancel key.
    Cancel,
    /// Pause key.
    Pause,
    /// Any other input; ends the gesture.
    Other,
    /// `next_event` fails.
    Fail,
}

/// Lifecycle notifications, in the order received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Begin,
    End,
    Scrolled,
}

/// Error returned for [`Step::Fail`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scripted input failure")]
pub struct ScriptError;

/// A [`DragHost`] driven by a script of [`Step`]s.
#[derive(Debug)]
pub struct ScriptedHost {
    pub viewport: TextViewport,
    pub line_height: u32,
    pub pointer_y: i64,
    script: VecDeque<Step>,
    next_timer_id: u64,
    pub pending_tick: Option<TimerHandle>,
    pub scheduled: Vec<(TimerHandle, Duration)>,
    pub cancelled: Vec<TimerHandle>,
    pub redraws: usize,
    pub notifications: Vec<Notification>,
    pub focused: Vec<PointerEvent>,
    /// Viewport state at every redraw.
    pub frames: Vec<crate::scroll::ViewportState>,
}

impl ScriptedHost {
    /// Host over `viewport` with `line_height` pixels per line, pointer at `pointer_y`.
    pub fn new(viewport: TextViewport, line_height: u32, pointer_y: i64) -> Self {
        Self {
            viewport,
            line_height,
            pointer_y,
            script: VecDeque::new(),
            next_timer_id: 1,
            pending_tick: None,
            scheduled: Vec::new(),
            cancelled: Vec::new(),
            redraws: 0,
            notifications: Vec::new(),
            focused: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Builder: queue `steps`.
    pub fn script(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.script.extend(steps);
        self
    }

    /// Default test content: 100 lines of 10 columns, 10 visible, 20px lines,
    /// pointer at y=100.
    pub fn standard() -> Self {
        Self::new(TextViewport::new(vec![10; 100], 10), 20, 100)
    }
}

impl DragHost for ScriptedHost {
    type Viewport = TextViewport;
    type Error = ScriptError;

    fn viewport(&mut self) -> &mut TextViewport {
        &mut self.viewport
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }

    fn pointer_y(&self) -> i64 {
        self.pointer_y
    }

    fn next_event(&mut self) -> Result<GestureEvent, ScriptError> {
        loop {
            let Some(step) = self.script.pop_front() else {
                return Ok(GestureEvent::Other);
            };
            return Ok(match step {
                Step::Move(y) => {
                    self.pointer_y = y;
                    GestureEvent::PointerMove { y }
                }
                Step::Tick => match self.pending_tick.take() {
                    Some(handle) => GestureEvent::Tick(handle),
                    None => continue,
                },
                Step::RawTick(id) => GestureEvent::Tick(TimerHandle::new(id)),
                Step::Cancel => GestureEvent::Cancel,
                Step::Pause => GestureEvent::Pause,
                Step::Other => GestureEvent::Other,
                Step::Fail => return Err(ScriptError),
            });
        }
    }

    fn schedule_tick(&mut self, delay: Duration) -> TimerHandle {
        assert!(
            self.pending_tick.is_none(),
            "a tick was scheduled while another was pending"
        );
        let handle = TimerHandle::new(self.next_timer_id);
        self.next_timer_id += 1;
        self.pending_tick = Some(handle);
        self.scheduled.push((handle, delay));
        handle
    }

    fn cancel_tick(&mut self, handle: TimerHandle) {
        if self.pending_tick == Some(handle) {
            self.pending_tick = None;
        }
        self.cancelled.push(handle);
    }

    fn request_redraw(&mut self) -> Result<(), ScriptError> {
        self.redraws += 1;
        self.frames.push(self.viewport.snapshot());
        Ok(())
    }

    fn notify_gesture_begin(&mut self) {
        self.notifications.push(Notification::Begin);
    }

    fn notify_gesture_end(&mut self) {
        self.notifications.push(Notification::End);
    }

    fn notify_viewport_scrolled(&mut self) {
        self.notifications.push(Notification::Scrolled);
    }

    fn focus_pointer_target(&mut self, event: &PointerEvent) {
        self.focused.push(*event);
    }
}

// ===== Terminal acceptance harness =====

use crate::config::{DragScrollConfig, ResolvedConfig};
use crate::source::Document;
use crate::view::events::ScriptedEvents;
use crate::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Runs the whole viewer against a scripted terminal.
pub struct AcceptanceTestHarness {
    document: Document,
    config: ResolvedConfig,
    width: u16,
    height: u16,
}

impl AcceptanceTestHarness {
    /// 200 numbered lines on an 80x24 terminal, 16px rows, linear curve.
    ///
    /// With a linear curve a drag of `n` rows scrolls exactly `n` lines per
    /// step, which keeps expected positions easy to derive.
    pub fn new() -> Self {
        let document = Document::new((1..=200).map(|n| format!("line number {n}")).collect());
        let config = ResolvedConfig {
            drag: DragScrollConfig {
                motion_scale: 1.0,
                motion_accelerate: 0.0,
                ..DragScrollConfig::default()
            },
            ..ResolvedConfig::default()
        };
        Self {
            document,
            config,
            width: 80,
            height: 24,
        }
    }

    /// Builder: adjust the configuration.
    pub fn configure(mut self, f: impl FnOnce(&mut ResolvedConfig)) -> Self {
        f(&mut self.config);
        self
    }

    /// Run the viewer until the script ends (it quits on an empty script).
    pub fn run(self, events: ScriptedEvents) -> TuiApp<TestBackend, ScriptedEvents> {
        let terminal =
            Terminal::new(TestBackend::new(self.width, self.height)).expect("test backend");
        let mut app =
            TuiApp::new(terminal, events, self.document, self.config).expect("viewer starts");
        app.run().expect("viewer runs to completion");
        app
    }
}

/// Text of the last drawn frame, rows joined by newlines.
pub fn render_to_string(app: &TuiApp<TestBackend, ScriptedEvents>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

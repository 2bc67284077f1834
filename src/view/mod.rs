//! TUI rendering and terminal management (impure shell)

pub mod events;
mod host;
pub mod layout;
pub mod pane;
pub mod styles;

pub use events::{CrosstermEvents, TerminalEvents};
pub use host::TerminalHost;
pub use layout::{calculate_layout, ScreenLayout, StatusInfo};
pub use pane::Pane;
pub use styles::{ColorConfig, PaneStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::gesture::{perform_drag_scroll_with_fallback, PointerEvent};
use crate::model::KeyAction;
use crate::source::Document;
use crossterm::{
    event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

/// Main TUI application
///
/// Generic over backend and event source to support testing with
/// `TestBackend` and scripted input.
pub struct TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: TerminalEvents,
{
    terminal: Terminal<B>,
    events: E,
    document: Document,
    panes: [Pane; 2],
    active: usize,
    config: ResolvedConfig,
    key_bindings: KeyBindings,
    styles: PaneStyles,
    dragging: bool,
    message: Option<String>,
    /// Event that ended a gesture, handled by the main loop next.
    requeued: Option<Event>,
}

impl<B, E> TuiApp<B, E>
where
    B: ratatui::backend::Backend,
    E: TerminalEvents,
{
    /// Create an application showing `document` in two panes.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` if the terminal size cannot be read.
    pub fn new(
        terminal: Terminal<B>,
        events: E,
        document: Document,
        config: ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let panes = [
            Pane::new(&document, config.scroll_margin),
            Pane::new(&document, config.scroll_margin),
        ];
        let mut app = Self {
            terminal,
            events,
            document,
            panes,
            active: 0,
            config,
            key_bindings: KeyBindings::default(),
            styles: PaneStyles::new(),
            dragging: false,
            message: None,
            requeued: None,
        };
        app.relayout()?;
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every handled
    /// event; a drag gesture redraws on its own while it runs.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Io` on terminal read or draw failures.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render - ensures screen has content immediately
        self.draw()?;

        loop {
            let event = match self.requeued.take() {
                Some(event) => event,
                None => match self.events.next_event(None)? {
                    Some(event) => event,
                    None => continue,
                },
            };

            match event {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(()); // User quit
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::NextPane => {
                self.active = (self.active + 1) % self.panes.len();
                debug!(pane = self.active, "Switched pane");
            }
            // Only meaningful while dragging; the gesture host handles them
            action if action.is_drag_action() => {}
            action => {
                let active = self.active;
                self.panes[active].apply(action);
            }
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Middle press starts a drag gesture, left press focuses the pane and
    /// places the cursor, the wheel scrolls the pane under the pointer.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), TuiError> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Middle) => self.drag(mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.pane_at(mouse.column, mouse.row) {
                    self.active = index;
                    self.panes[index].place_cursor_at(mouse.column, mouse.row);
                }
                Ok(())
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if let Some(index) = self.pane_at(mouse.column, mouse.row) {
                    let action = if mouse.kind == MouseEventKind::ScrollUp {
                        KeyAction::ScrollUp
                    } else {
                        KeyAction::ScrollDown
                    };
                    self.panes[index].apply(action);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Run one drag gesture started by a middle press.
    fn drag(&mut self, mouse: MouseEvent) -> Result<(), TuiError> {
        let pointer_y = i64::from(mouse.row) * i64::from(self.config.line_height_px);
        let event = PointerEvent::new(i64::from(mouse.column), pointer_y);
        let drag_config = self.config.drag.clone();

        self.dragging = true;
        self.message = None;
        let result = {
            let mut host = TerminalHost::new(self, pointer_y);
            perform_drag_scroll_with_fallback(&mut host, &drag_config, &event, |host| {
                host.place_cursor_at_pointer(&event)
            })
        };
        self.dragging = false;

        let scrolled = result?;
        debug!(scrolled, pane = self.active, "Drag finished");
        Ok(())
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.layout_panes(Rect::new(0, 0, width, height));
    }

    /// Lay the panes out for the current terminal size.
    fn relayout(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.layout_panes(Rect::new(0, 0, size.width, size.height));
        Ok(())
    }

    fn layout_panes(&mut self, area: Rect) {
        let layout = calculate_layout(area);
        for (pane, area) in self.panes.iter_mut().zip(layout.panes) {
            pane.set_area(area);
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        self.relayout()?;

        let Self {
            terminal,
            document,
            panes,
            active,
            styles,
            dragging,
            message,
            ..
        } = self;
        let status = StatusInfo {
            active: *active,
            dragging: *dragging,
            message: message.as_deref(),
        };

        terminal.draw(|frame| {
            layout::render_layout(frame, panes, document, status, styles);
        })?;

        Ok(())
    }

    /// Index of the pane containing the cell at `column`, `row`.
    fn pane_at(&self, column: u16, row: u16) -> Option<usize> {
        self.panes.iter().position(|pane| pane.contains(column, row))
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Hand an event that ended a gesture back to the main loop.
    fn requeue(&mut self, event: Event) {
        self.requeued = Some(event);
    }

    /// Both panes, left then right.
    pub fn panes(&self) -> &[Pane; 2] {
        &self.panes
    }

    /// Index of the focused pane.
    pub fn active_pane(&self) -> usize {
        self.active
    }

    /// The terminal, for inspecting what was drawn.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The event source.
    pub fn events(&self) -> &E {
        &self.events
    }
}

/// Initialize and run the TUI application on the real terminal.
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns `TuiError::Io` for terminal setup, input or drawing failures.
pub fn run_with_document(document: Document, config: ResolvedConfig) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(crossterm::event::EnableMouseCapture)?;
    let backend: CrosstermBackend<Stdout> = CrosstermBackend::new(stdout);

    info!(lines = document.len(), "Starting viewer");

    // Run the app and ensure cleanup happens even on error
    let result = Terminal::new(backend)
        .map_err(TuiError::from)
        .and_then(|terminal| TuiApp::new(terminal, CrosstermEvents, document, config))
        .and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Viewport;
    use crate::test_harness::render_to_string;
    use crate::view::events::ScriptedEvents;
    use ratatui::backend::TestBackend;

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    // Helper to create test TuiApp
    fn create_test_app() -> TuiApp<TestBackend, ScriptedEvents> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let document = Document::new((1..=200).map(|n| format!("line number {n}")).collect());
        TuiApp::new(terminal, ScriptedEvents::new(), document, ResolvedConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key(key(KeyCode::Char('x'))));
    }

    #[test]
    fn new_sizes_panes_to_terminal() {
        let app = create_test_app();
        // 24 rows minus status bar minus two border rows.
        assert_eq!(app.panes()[0].viewport().visible_lines(), 21);
        assert_eq!(app.panes()[1].viewport().visible_lines(), 21);
    }

    #[test]
    fn handle_key_j_scrolls_only_focused_pane() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.panes()[0].viewport().line_offset(), 1);
        assert_eq!(app.panes()[1].viewport().line_offset(), 0);
    }

    #[test]
    fn handle_key_tab_switches_pane() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_pane(), 1);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.panes()[1].viewport().line_offset(), 1);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active_pane(), 0);
    }

    #[test]
    fn drag_keys_outside_gesture_do_nothing() {
        let mut app = create_test_app();
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(!app.handle_key(key(KeyCode::Char(' '))));
        assert_eq!(app.panes()[0].viewport().line_offset(), 0);
    }

    #[test]
    fn left_click_focuses_pane_and_places_cursor() {
        let mut app = create_test_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 45,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click).unwrap();
        assert_eq!(app.active_pane(), 1);
        assert_eq!(app.panes()[1].viewport().cursor().line, 2);
    }

    #[test]
    fn wheel_scrolls_pane_under_pointer() {
        let mut app = create_test_app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 60,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel).unwrap();
        assert_eq!(app.panes()[1].viewport().line_offset(), 1);
        assert_eq!(app.active_pane(), 0, "the wheel does not move focus");
    }

    #[test]
    fn draw_renders_document_and_status() {
        let mut app = create_test_app();
        app.draw().unwrap();
        let screen = render_to_string(&app);
        assert!(screen.contains("line number 1 "), "{screen}");
        assert!(screen.contains("Pane 1 | line 1:0"), "{screen}");
        assert!(screen.contains("VIEW | pane 1 | line 1/200 +0px"), "{screen}");
    }

    #[test]
    fn resize_relayouts_panes() {
        let mut app = create_test_app();
        app.handle_resize(100, 12);
        assert_eq!(app.panes()[0].viewport().visible_lines(), 9);
        assert_eq!(app.panes()[1].area().x, 50);
    }
}

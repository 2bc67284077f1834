//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// The drag actions only mean something while a gesture is running; outside
/// one they are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the focused pane up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the focused pane down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first line. Default: g/Home
    ScrollToTop,
    /// Jump so the last line is at the bottom. Default: G/End
    ScrollToBottom,

    // Panes
    /// Move focus to the other pane. Default: Tab
    NextPane,

    // Drag gesture
    /// Restore the pre-gesture view and keep dragging. Default: Esc
    CancelDrag,
    /// Re-anchor the drag at the current pointer position. Default: Space
    PauseDrag,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action is handled by a running drag gesture.
    pub fn is_drag_action(&self) -> bool {
        matches!(self, KeyAction::CancelDrag | KeyAction::PauseDrag)
    }
}

//! Pane and status bar styling.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Create a ColorConfig with colors explicitly on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PaneStyles =====

/// Styles used to draw panes and the status bar.
///
/// Without colors the cursor line is still shown reversed, so it stays
/// visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneStyles {
    /// Border of the pane that keys and drags go to.
    pub focused_border: Style,
    /// Border of the other pane.
    pub border: Style,
    /// The line the cursor is on.
    pub cursor_line: Style,
    /// Status bar while idle.
    pub status: Style,
    /// Status bar while a drag gesture runs.
    pub status_dragging: Style,
}

impl PaneStyles {
    /// Styles for the current environment.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Styles for an explicit color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::DarkGray),
                cursor_line: Style::default().bg(Color::DarkGray),
                status: Style::default().bg(Color::DarkGray).fg(Color::White),
                status_dragging: Style::default().bg(Color::Blue).fg(Color::White),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                cursor_line: reversed,
                status: reversed,
                status_dragging: reversed.add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for PaneStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorless_styles_have_no_colors() {
        let styles = PaneStyles::with_color_config(ColorConfig::new(false));
        for style in [
            styles.focused_border,
            styles.border,
            styles.cursor_line,
            styles.status,
            styles.status_dragging,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn focused_border_differs_from_plain_border() {
        for enabled in [true, false] {
            let styles = PaneStyles::with_color_config(ColorConfig::new(enabled));
            assert_ne!(styles.focused_border, styles.border);
        }
    }

    #[test]
    fn dragging_status_is_distinct() {
        let styles = PaneStyles::with_color_config(ColorConfig::new(true));
        assert_ne!(styles.status, styles.status_dragging);
    }
}

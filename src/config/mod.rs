//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// How a drag is turned into scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollStyle {
    /// Whole lines only; the raw pointer displacement decides when a line's
    /// worth of motion has accrued.
    Line,
    /// Displacement goes through the velocity curve in pixels, scrolled
    /// smoothly or snapped to whole lines.
    #[default]
    LineByPixel,
}

impl ScrollStyle {
    /// Name used in config files, env vars and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollStyle::Line => "line",
            ScrollStyle::LineByPixel => "line-by-pixel",
        }
    }
}

/// Error for an unrecognized style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scroll style {0:?} (expected \"line\" or \"line-by-pixel\")")]
pub struct InvalidScrollStyle(pub String);

impl FromStr for ScrollStyle {
    type Err = InvalidScrollStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ScrollStyle::Line),
            "line-by-pixel" => Ok(ScrollStyle::LineByPixel),
            other => Err(InvalidScrollStyle(other.to_string())),
        }
    }
}

/// Gesture configuration.
///
/// Read-only for the duration of a gesture; the controller takes it by
/// reference and threads it into each step.
#[derive(Debug, Clone, PartialEq)]
pub struct DragScrollConfig {
    /// Line or line-by-pixel scrolling.
    pub style: ScrollStyle,
    /// Delay between continuous-scroll ticks.
    pub tick_interval: Duration,
    /// Scale applied to the displacement (in lines) before the power curve.
    pub motion_scale: f64,
    /// Growth of the curve exponent with displacement. 0 is linear.
    pub motion_accelerate: f64,
    /// Scroll by pixels instead of snapping to whole lines.
    pub smooth: bool,
    /// Stop forward scrolling once the last line reaches the bottom.
    pub clamp: bool,
    /// Scroll the viewport under the pointer rather than the focused one.
    pub follow_pointer: bool,
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            style: ScrollStyle::LineByPixel,
            tick_interval: Duration::from_millis(10),
            motion_scale: 0.25,
            motion_accelerate: 0.3,
            smooth: true,
            clamp: false,
            follow_pointer: true,
        }
    }
}

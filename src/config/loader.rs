//! Configuration file loading with precedence handling.

use super::{DragScrollConfig, ScrollStyle};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is outside its usable range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key that was rejected.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dragscroll/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Scroll style: "line" or "line-by-pixel".
    #[serde(default)]
    pub style: Option<ScrollStyle>,

    /// Continuous-scroll tick interval in milliseconds.
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,

    /// Velocity curve scale.
    #[serde(default)]
    pub motion_scale: Option<f64>,

    /// Velocity curve acceleration exponent.
    #[serde(default)]
    pub motion_accelerate: Option<f64>,

    /// Pixel-smooth scrolling.
    #[serde(default)]
    pub smooth: Option<bool>,

    /// Clamp forward scrolling at the end of content.
    #[serde(default)]
    pub clamp: Option<bool>,

    /// Scroll the pane under the pointer.
    #[serde(default)]
    pub follow_pointer: Option<bool>,

    /// Virtual pixels per terminal row.
    #[serde(default)]
    pub line_height_px: Option<u32>,

    /// Lines kept between the cursor and the pane edges.
    #[serde(default)]
    pub scroll_margin: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Gesture settings handed to the controller.
    pub drag: DragScrollConfig,
    /// Virtual pixels per terminal row.
    pub line_height_px: u32,
    /// Scroll margin in lines.
    pub scroll_margin: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            drag: DragScrollConfig::default(),
            line_height_px: 16,
            scroll_margin: 2,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check that numeric settings are usable by the scroll engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let drag = &self.drag;
        if !(drag.motion_scale.is_finite() && drag.motion_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "motion_scale",
                reason: format!("must be a positive number, got {}", drag.motion_scale),
            });
        }
        if !(drag.motion_accelerate.is_finite() && drag.motion_accelerate >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "motion_accelerate",
                reason: format!("must be zero or positive, got {}", drag.motion_accelerate),
            });
        }
        if drag.tick_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.line_height_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "line_height_px",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dragscroll/dragscroll.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dragscroll").join("dragscroll.log")
    } else {
        PathBuf::from("dragscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dragscroll/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dragscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DRAGSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/dragscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("DRAGSCROLL_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(
                "DRAGSCROLL_CONFIG is set but empty".to_string(),
            ));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let drag = DragScrollConfig {
        style: config.style.unwrap_or(defaults.drag.style),
        tick_interval: config
            .tick_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.drag.tick_interval),
        motion_scale: config.motion_scale.unwrap_or(defaults.drag.motion_scale),
        motion_accelerate: config
            .motion_accelerate
            .unwrap_or(defaults.drag.motion_accelerate),
        smooth: config.smooth.unwrap_or(defaults.drag.smooth),
        clamp: config.clamp.unwrap_or(defaults.drag.clamp),
        follow_pointer: config.follow_pointer.unwrap_or(defaults.drag.follow_pointer),
    };

    ResolvedConfig {
        drag,
        line_height_px: config.line_height_px.unwrap_or(defaults.line_height_px),
        scroll_margin: config.scroll_margin.unwrap_or(defaults.scroll_margin),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DRAGSCROLL_STYLE`: "line" or "line-by-pixel"
/// - `DRAGSCROLL_SMOOTH`: "1"/"true" or "0"/"false"
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(style) = std::env::var("DRAGSCROLL_STYLE") {
        match style.parse::<ScrollStyle>() {
            Ok(style) => config.drag.style = style,
            Err(err) => warn!(%err, "Ignoring DRAGSCROLL_STYLE"),
        }
    }

    if let Ok(smooth) = std::env::var("DRAGSCROLL_SMOOTH") {
        match parse_flag(&smooth) {
            Some(smooth) => config.drag.smooth = smooth,
            None => warn!(value = %smooth, "Ignoring DRAGSCROLL_SMOOTH"),
        }
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Overrides collected from command line flags.
///
/// `None` (or `false` for switches) means "flag not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--style`
    pub style: Option<ScrollStyle>,
    /// `--no-smooth`
    pub no_smooth: bool,
    /// `--clamp`
    pub clamp: bool,
    /// `--scale`
    pub motion_scale: Option<f64>,
    /// `--accel`
    pub motion_accelerate: Option<f64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(style) = cli.style {
        config.drag.style = style;
    }

    if cli.no_smooth {
        config.drag.smooth = false;
    }

    if cli.clamp {
        config.drag.clamp = true;
    }

    if let Some(scale) = cli.motion_scale {
        config.drag.motion_scale = scale;
    }

    if let Some(accel) = cli.motion_accelerate {
        config.drag.motion_accelerate = accel;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

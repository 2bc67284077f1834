//! dragscroll - Entry Point

use clap::Parser;
use dragscroll::config::{CliOverrides, ResolvedConfig, ScrollStyle};
use dragscroll::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// dragscroll - view a document and scroll it by dragging with the middle button
#[derive(Parser, Debug)]
#[command(name = "dragscroll")]
#[command(version)]
#[command(about = "Terminal document viewer with press-drag-release scrolling")]
pub struct Args {
    /// Path to the document (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scroll style: "line" or "line-by-pixel"
    #[arg(long)]
    pub style: Option<ScrollStyle>,

    /// Snap to whole lines instead of scrolling by pixels
    #[arg(long)]
    pub no_smooth: bool,

    /// Stop forward scrolling once the last line reaches the bottom
    #[arg(long)]
    pub clamp: bool,

    /// Velocity curve scale (must be positive)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Velocity curve acceleration (0 is linear)
    #[arg(long)]
    pub accel: Option<f64>,
}

impl Args {
    /// Flags that override the configuration.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            style: self.style,
            no_smooth: self.no_smooth,
            clamp: self.clamp,
            motion_scale: self.scale,
            motion_accelerate: self.accel,
        }
    }
}

/// Resolve configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // 1. Load config file (or None if missing)
    let config_file = dragscroll::config::load_config_with_precedence(args.config.clone())?;

    // 2. Merge with defaults
    let merged = dragscroll::config::merge_config(config_file);

    // 3. Apply environment variable overrides
    let with_env = dragscroll::config::apply_env_overrides(merged);

    // 4. Apply CLI argument overrides
    let config = dragscroll::config::apply_cli_overrides(with_env, args.cli_overrides());

    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    // Initialize tracing with configured log file path
    dragscroll::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Read the document (file or stdin)
    let document = dragscroll::source::load_document(args.file)?;

    dragscroll::view::run_with_document(document, config)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

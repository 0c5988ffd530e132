//! Command-line argument parsing for claude-keywords-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Settings loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use claude_keywords_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for claude-keywords-tui.
///
/// Settings precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --log-dir)
/// 2. Environment variables (e.g., CLAUDE_KEYWORDS_THEME)
/// 3. Settings file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "claude-keywords-tui",
    about = "Terminal user interface for composing Claude prompts from keywords",
    version,
    after_help = "Examples:\n  claude-keywords-tui\n  claude-keywords-tui --theme light\n  claude-keywords-tui -s think-hard -p 'Review this diff'\n  claude-keywords-tui --log-dir /tmp/claude-keywords\n"
)]
pub struct Cli {
    /// Path to a custom settings file
    #[arg(long, env = "CLAUDE_KEYWORDS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Colour theme (default, light, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Keyword id to preselect (repeatable)
    #[arg(short = 's', long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Initial custom prompt text
    #[arg(short, long, value_name = "TEXT")]
    pub prompt: Option<String>,
}

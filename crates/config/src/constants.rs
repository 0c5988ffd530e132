//! Centralized constants for the Claude Keywords workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Application identity
// =============================================================================

/// Application name used for project directories and log files.
pub const APP_NAME: &str = "claude-keywords";

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name prefix of the TUI's rolling log file.
pub const TUI_LOG_FILE_NAME: &str = "claude-keywords-tui.log";

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the colour theme (`default`, `light`, `high_contrast`, `monochrome`).
pub const ENV_THEME: &str = "CLAUDE_KEYWORDS_THEME";

/// Overrides the directory for TUI log files.
pub const ENV_LOG_DIR: &str = "CLAUDE_KEYWORDS_LOG_DIR";

/// Overrides the settings file location.
pub const ENV_CONFIG_PATH: &str = "CLAUDE_KEYWORDS_CONFIG_PATH";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// TUI runtime
// =============================================================================

/// Default UI tick interval in milliseconds (drives toast expiry).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default capacity of the TUI action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default directory for TUI log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

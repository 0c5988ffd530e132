//! Shared test utilities for claude-keywords integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests never write to the real clipboard; only paths that refuse to emit
//!   are exercised with `--copy`/`--paste`.

use assert_cmd::Command;

/// Returns a hermetic `claude-keywords` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `CLAUDE_KEYWORDS_*` variables from the host are cleared.
pub fn keywords_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("claude-keywords");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("CLAUDE_KEYWORDS_THEME")
        .env_remove("CLAUDE_KEYWORDS_LOG_DIR")
        .env_remove("CLAUDE_KEYWORDS_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

//! Integration tests for dotenv failure handling in the CLI.
//!
//! Invariants:
//! - Tests must explicitly clear `DOTENV_DISABLED` to enable dotenv loading.
//! - Tests use temp directories and set current_dir to isolate `.env` file effects.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("claude-keywords");
    cmd.current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("CLAUDE_KEYWORDS_THEME")
        .env_remove("CLAUDE_KEYWORDS_CONFIG_PATH");
    cmd
}

#[test]
fn test_invalid_dotenv_causes_cli_failure_without_leaking() {
    let temp_dir = TempDir::new().unwrap();
    let private_value = "private_prompt_value_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("CLAUDE_KEYWORDS_LOG_DIR={private_value}\nINVALID_LINE"),
    )
    .unwrap();

    cmd_in(&temp_dir)
        .args(["list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env"))
        .stderr(predicate::str::contains(private_value).not());
}

#[test]
fn test_dotenv_disabled_skips_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    cmd_in(&temp_dir)
        .env("DOTENV_DISABLED", "1")
        .args(["keyword", "think-basic"])
        .assert()
        .success()
        .stdout("think\n");
}

#[test]
fn test_dotenv_provides_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("from-dotenv.json");
    fs::write(
        temp_dir.path().join(".env"),
        format!("CLAUDE_KEYWORDS_CONFIG_PATH={}\n", config.display()),
    )
    .unwrap();

    cmd_in(&temp_dir)
        .args(["settings", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-dotenv.json"));
}

//! Integration tests for the `completions` command.

mod common;

use common::keywords_cmd;
use predicates::prelude::*;

#[test]
fn test_completions_bash_outputs_non_empty() {
    keywords_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-keywords"));
}

#[test]
fn test_completions_zsh_outputs_non_empty() {
    keywords_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_fish_outputs_non_empty() {
    keywords_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_invalid_shell() {
    keywords_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

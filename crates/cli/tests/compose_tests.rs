//! Integration tests for the `compose` and `keyword` commands.

mod common;

use common::keywords_cmd;
use predicates::prelude::*;

#[test]
fn test_compose_prints_keywords_joined() {
    keywords_cmd()
        .args(["compose", "-s", "think-basic", "-s", "tool-parallel"])
        .assert()
        .success()
        .stdout("think\n\nUse tools in parallel when possible to optimize performance.\n");
}

#[test]
fn test_compose_trims_prompt_and_puts_it_first() {
    keywords_cmd()
        .args(["compose", "-p", "  Summarize this file  ", "-s", "output-concise"])
        .assert()
        .success()
        .stdout("Summarize this file\n\nPlease be concise and direct in your response.\n");
}

#[test]
fn test_compose_prompt_only() {
    // No keywords: the separator after the prompt is kept, then println adds a newline.
    keywords_cmd()
        .args(["compose", "-p", "Just this"])
        .assert()
        .success()
        .stdout("Just this\n\n\n");
}

#[test]
fn test_compose_double_select_cancels() {
    keywords_cmd()
        .args(["compose", "-s", "think-hard", "-s", "think-hard", "-p", "x"])
        .assert()
        .success()
        .stdout("x\n\n\n");
}

#[test]
fn test_compose_nothing_selected_exits_4() {
    keywords_cmd()
        .arg("compose")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗ Nothing to Print"));
}

#[test]
fn test_compose_copy_empty_never_touches_clipboard() {
    keywords_cmd()
        .args(["compose", "-p", "   ", "--copy"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "✗ Nothing to Copy: Please select keywords or enter a custom prompt",
        ));
}

#[test]
fn test_compose_paste_empty_reports_nothing_to_paste() {
    keywords_cmd()
        .args(["compose", "--paste", "--quiet"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Nothing to Paste"));
}

#[test]
fn test_compose_unknown_id_is_validation_error() {
    keywords_cmd()
        .args(["compose", "-s", "think-basic", "-s", "think-harder"])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown keyword id 'think-harder'"));
}

#[test]
fn test_keyword_prints_verbatim() {
    keywords_cmd()
        .args(["keyword", "output-code-only"])
        .assert()
        .success()
        .stdout("Return only the code without explanations or comments.\n");
}

#[test]
fn test_keyword_unknown_id() {
    keywords_cmd()
        .args(["keyword", "nope"])
        .assert()
        .code(5);
}

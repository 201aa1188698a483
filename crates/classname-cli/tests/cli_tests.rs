//! Integration tests for the `cn` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the join and
//! tokens subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, the --dedupe flag, and error handling on bad input.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the button.json fixture.
fn button_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/button.json")
}

/// Helper: path to the repeats.json fixture.
fn repeats_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/repeats.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Join subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn join_stdin_to_stdout() {
    let input = r#"["btn", {"btn-active": true, "hidden": false}]"#;

    Command::cargo_bin("cn")
        .unwrap()
        .arg("join")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("btn btn-active");
}

#[test]
fn join_file_to_stdout() {
    Command::cargo_bin("cn")
        .unwrap()
        .args(["join", "-i", button_json_path()])
        .assert()
        .success()
        .stdout("btn rounded-md btn-primary focus:ring-2 hover:bg-blue-700 0");
}

#[test]
fn join_file_to_file() {
    let dir = std::env::temp_dir().join("cn_join_file_to_file");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("out.txt");

    Command::cargo_bin("cn")
        .unwrap()
        .args([
            "join",
            "-i",
            repeats_json_path(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, "btn btn card btn card badge");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn join_with_dedupe_drops_repeats() {
    Command::cargo_bin("cn")
        .unwrap()
        .args(["join", "--dedupe", "-i", repeats_json_path()])
        .assert()
        .success()
        .stdout("btn card badge");
}

#[test]
fn join_empty_expression_prints_nothing() {
    Command::cargo_bin("cn")
        .unwrap()
        .arg("join")
        .write_stdin("[null, false, \"\"]")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn join_preserves_numeric_zero() {
    Command::cargo_bin("cn")
        .unwrap()
        .arg("join")
        .write_stdin(r#"[0, "a"]"#)
        .assert()
        .success()
        .stdout("0 a");
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokens subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tokens_emits_one_per_line() {
    Command::cargo_bin("cn")
        .unwrap()
        .arg("tokens")
        .write_stdin(r#"["a", {"b": true}, ["c"]]"#)
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn tokens_empty_expression_emits_no_lines() {
    Command::cargo_bin("cn")
        .unwrap()
        .arg("tokens")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn tokens_with_dedupe() {
    Command::cargo_bin("cn")
        .unwrap()
        .args(["tokens", "--dedupe", "-i", repeats_json_path()])
        .assert()
        .success()
        .stdout("btn\ncard\nbadge\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_exits_nonzero() {
    Command::cargo_bin("cn")
        .unwrap()
        .arg("join")
        .write_stdin("not json at all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("aggregate JSON class expression"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    Command::cargo_bin("cn")
        .unwrap()
        .args(["join", "-i", "/nonexistent/classes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("cn")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// Scopec - A minimal compiler front-end with a block-scoped symbol table
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! End-to-end CLI integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scopec"))
}

/// Write `source` into a fresh temporary directory.
fn write_source(name: &str, source: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    (dir, path)
}

fn run(args: &[&str], path: &PathBuf) -> Output {
    cargo_bin()
        .arg(path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scopec"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--tokens"));
    assert!(stdout.contains("--hide-unused"));
    assert!(stdout.contains("--verbose"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scopec"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

/// Test missing source argument is a usage error.
#[test]
fn test_missing_argument() {
    let output = cargo_bin().output().expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
}

/// Test unknown report format is a usage error.
#[test]
fn test_unknown_format() {
    let (_dir, path) = write_source("ok.txt", "int x;");
    let output = run(&["--format", "xml"], &path);
    assert_eq!(output.status.code(), Some(2));
}

/// Test unreadable source file.
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[], &dir.path().join("nope.txt"));

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot read"));
}

/// Test the text report of a valid program.
#[test]
fn test_text_report() {
    let (_dir, path) = write_source("sample.txt", include_str!("fixtures/valid/sample.txt"));
    let output = run(&[], &path);

    assert!(
        output.status.success(),
        "Compilation failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SYMBOL TABLE"));
    assert!(stdout.contains("Scope: global\n"));
    assert!(stdout.contains("Scope: global.block1\n"));
    assert!(stdout.contains("Total Symbols:       5"));
    assert!(stdout.contains("Used Vars:           1"));
    assert!(stdout.contains("WARNINGS:"));
}

/// Test the JSON report parses and carries the statistics.
#[test]
fn test_json_report() {
    let (_dir, path) = write_source("shadow.txt", "int a = 5;\n{\n  int a = 100;\n}\n");
    let output = run(&["--format", "json"], &path);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["statistics"]["total_scopes"], 2);
    assert_eq!(report["statistics"]["total_symbols"], 2);
    assert_eq!(report["scopes"][1]["path"], "global.block1");
    assert_eq!(report["scopes"][1]["symbols"][0]["value"], 100);
}

/// Test semantic errors are reported and fail the run.
#[test]
fn test_semantic_errors_exit_code() {
    let (_dir, path) = write_source(
        "errors.txt",
        include_str!("fixtures/invalid/semantic_errors.txt"),
    );
    let output = run(&[], &path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E201]: Duplicate declaration of variable 'x'"));
    assert!(stderr.contains("error[E200]: Undeclared variable 'y'"));
    assert!(stderr.contains("error[E202]: Cannot assign to constant 'PI'"));
    assert!(stderr.contains("errors.txt:2:5"));

    // The report is still printed.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compilation Errors:  4"));
}

/// Test a fatal error prints no report.
#[test]
fn test_fatal_error() {
    let (_dir, path) = write_source("unclosed.txt", "int x = 1;\n{\n  int y;\n");
    let output = run(&[], &path);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E150]"));
    assert!(stderr.contains("hint: the block opened here is never closed"));
}

/// Test a fatal error is printed after the semantic errors before it.
#[test]
fn test_fatal_error_with_semantic_errors() {
    let (_dir, path) = write_source("stray.txt", "y = 1;\n}\n");
    let output = run(&[], &path);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let semantic = stderr.find("error[E200]: Undeclared variable 'y'").unwrap();
    let fatal = stderr.find("error[E151]").unwrap();
    assert!(semantic < fatal);
}

/// Test the token dump.
#[test]
fn test_tokens_flag() {
    let (_dir, path) = write_source("tokens.txt", "int x = 1;\nx += x;\n");
    let output = run(&["--tokens"], &path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let tokens_at = stdout.find("TOKENS").unwrap();
    let table_at = stdout.find("SYMBOL TABLE").unwrap();
    assert!(tokens_at < table_at);
    assert!(stdout.contains("OPERATOR    +="));
}

/// Test unused symbols are left out of the listing.
#[test]
fn test_hide_unused_flag() {
    let (_dir, path) = write_source("unused.txt", "int kept = 1;\nint dropped = kept;\n");
    let output = run(&["--hide-unused"], &path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\nkept "));
    assert!(!stdout.contains("\ndropped "));
}

/// Test warnings reach stderr only in verbose mode.
#[test]
fn test_verbose_warnings() {
    let (_dir, path) = write_source("warn.txt", "int idle;\n");

    let quiet = run(&[], &path);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("warning[W001]"));

    let verbose = run(&["--verbose"], &path);
    assert!(verbose.status.success());
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("warning[W001]"));
}

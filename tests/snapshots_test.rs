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

//! Snapshot tests for the scopec compiler.
//!
//! These tests use the `insta` crate to capture and verify output
//! from various compiler stages.

use scopec::output::{render_text, render_tokens, ReportOptions};
use scopec::{compile, error::format_error, lexer, Span, Token};

// ============================================================================
// Lexer Snapshot Tests
// ============================================================================

/// Format tokens for snapshot comparison.
fn format_tokens(tokens: &[(Token, Span)]) -> String {
    let mut output = String::new();
    for (token, span) in tokens {
        output.push_str(&format!(
            "{:?} @ {}..{} line {}\n",
            token, span.start, span.end, span.line
        ));
    }
    output
}

#[test]
fn test_lexer_snapshot_shadowing() {
    let source = include_str!("fixtures/valid/shadowing.txt");
    let tokens = lexer::tokenize(source).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r###"
    Int @ 0..3 line 1
    Identifier("a") @ 4..5 line 1
    Equal @ 6..7 line 1
    Integer(5) @ 8..9 line 1
    Semicolon @ 9..10 line 1
    LeftBrace @ 11..12 line 2
    Int @ 15..18 line 3
    Identifier("a") @ 19..20 line 3
    Equal @ 21..22 line 3
    Integer(100) @ 23..26 line 3
    Semicolon @ 26..27 line 3
    RightBrace @ 28..29 line 4
    "###);
}

#[test]
fn test_token_dump_snapshot() {
    let tokens = lexer::tokenize("int x = 1;").unwrap();
    insta::assert_snapshot!(render_tokens(&tokens), @r###"
    ================================================================================
    TOKENS
    ================================================================================
       1  KEYWORD     int
       1  IDENTIFIER  x
       1  OPERATOR    =
       1  NUMBER      1
       1  DELIMITER   ;
    ================================================================================
    "###);
}

// ============================================================================
// Report Snapshot Tests
// ============================================================================

#[test]
fn test_report_snapshot_shadowing() {
    let source = include_str!("fixtures/valid/shadowing.txt");
    let compilation = compile(source).unwrap();
    insta::assert_snapshot!(render_text(&compilation, ReportOptions::default()), @r###"
    ================================================================================
    SYMBOL TABLE
    ================================================================================

    Scope: global
    --------------------------------------------------------------------------------
    Name            Type       Line   Init   Used   Value
    --------------------------------------------------------------------------------
    a               int        1      true   false  5

    Scope: global.block1
    --------------------------------------------------------------------------------
    Name            Type       Line   Init   Used   Value
    --------------------------------------------------------------------------------
    a               int        3      true   false  100
    ================================================================================

    ================================================================================
    COMPILATION STATISTICS
    ================================================================================
    Total Tokens:        11
    Total Symbols:       2
    Total Scopes:        2
    Initialized Vars:    2
    Used Vars:           0
    Unused Vars:         2
    Compilation Errors:  0
    ================================================================================

    WARNINGS:
      - Line 1: Variable 'a' declared but never used
      - Line 3: Variable 'a' declared but never used
    "###);
}

// ============================================================================
// Error Snapshot Tests
// ============================================================================

#[test]
fn test_error_snapshot_duplicate() {
    let source = "int x = 10;\nint x = 20;\n";
    let compilation = compile(source).unwrap();
    let error = compilation.analysis.errors.iter().next().unwrap();
    insta::assert_snapshot!(format_error(error, source, Some("dup.txt")), @r###"
    error[E201]: Duplicate declaration of variable 'x'
      --> dup.txt:2:5
      |
    2 | int x = 20;
      |     ^
    "###);
}

#[test]
fn test_error_snapshot_unclosed_block() {
    let source = "int x;\n{\n  x = 1;\n";
    let error = compile(source).unwrap_err();
    insta::assert_snapshot!(format_error(&error.fatal, source, None), @r###"
    error[E150]: Unclosed block: expected '}' before end of file
      --> <input>:2:1
      |
    2 | {
      | ^
      = hint: the block opened here is never closed
    "###);
}

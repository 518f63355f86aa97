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

//! Tests for compound assignment operators.
//!
//! Tests cover:
//! - Lexer: all four compound operators are single tokens
//! - Parser: the stored value is the expanded expression
//! - Symbol table: compound targets count as reads

use scopec::{compile, lexer, ErrorCode, Token, Value};
use test_case::test_case;

// ============================================================================
// Helper Functions
// ============================================================================

/// Compile `source` and return the stored value of `name`.
fn value_of(source: &str, name: &str) -> Value {
    let compilation = compile(source).unwrap();
    assert!(
        !compilation.has_errors(),
        "unexpected errors: {:?}",
        compilation.analysis.errors.lines()
    );
    compilation
        .analysis
        .table
        .resolve(name)
        .and_then(|s| s.value().cloned())
        .unwrap()
}

// ============================================================================
// Lexer Tests
// ============================================================================

#[test_case("+=", Token::PlusAssign, Token::Plus; "plus")]
#[test_case("-=", Token::MinusAssign, Token::Minus; "minus")]
#[test_case("*=", Token::StarAssign, Token::Star; "star")]
#[test_case("/=", Token::SlashAssign, Token::Slash; "slash")]
fn test_compound_operator_tokens(source: &str, expected: Token, binary: Token) {
    let tokens = lexer::tokenize(source).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, expected);
    assert!(tokens[0].0.is_assignment());
    assert_eq!(tokens[0].0.compound_operator(), Some(binary));
}

#[test]
fn test_plain_assignment_has_no_binary_operator() {
    assert!(Token::Equal.is_assignment());
    assert_eq!(Token::Equal.compound_operator(), None);
}

// ============================================================================
// Stored Values
// ============================================================================

#[test_case("int x = 1;\nx += 2;", "x + 2"; "add_literal")]
#[test_case("int x = 1;\nx -= 2;", "x - 2"; "subtract_literal")]
#[test_case("int x = 1;\nx *= -2;", "x * -2"; "multiply_negative")]
#[test_case("int x = 1;\nx /= 4;", "x / 4"; "divide_literal")]
#[test_case("int x = 1;\nint y = 2;\nx += y;", "x + y"; "add_variable")]
#[test_case("int x = 1;\nint y = 2;\nx *= y + 1;", "x * (y + 1)"; "binary_rhs_grouped")]
#[test_case("int x = 1;\nint y = 2;\nx -= (y);", "x - (y)"; "parenthesized_rhs")]
fn test_compound_value(source: &str, expected: &str) {
    assert_eq!(value_of(source, "x"), Value::Expr(expected.to_string()));
}

#[test]
fn test_compound_on_float() {
    assert_eq!(
        value_of("float f = 1.5;\nf *= 2;", "f"),
        Value::Expr("f * 2".to_string())
    );
}

#[test]
fn test_plain_assignment_after_compound() {
    assert_eq!(value_of("int x = 1;\nx += 2;\nx = 7;", "x"), Value::Int(7));
}

// ============================================================================
// Usage Tracking
// ============================================================================

#[test]
fn test_compound_target_is_used() {
    let compilation = compile("int x = 1;\nx += 1;").unwrap();
    assert!(compilation.analysis.table.resolve("x").unwrap().is_used());
    assert!(compilation.warnings.is_empty());
}

#[test]
fn test_plain_target_is_not_used() {
    let compilation = compile("int x = 1;\nx = 2;").unwrap();
    assert!(!compilation.analysis.table.resolve("x").unwrap().is_used());
    assert_eq!(compilation.warnings.len(), 1);
}

#[test]
fn test_compound_in_nested_scope_marks_outer() {
    let compilation = compile("int x = 1;\n{\n  { x -= 1; }\n}").unwrap();
    let table = &compilation.analysis.table;
    assert!(table.resolve_from("x", table.root()).unwrap().is_used());
}

// ============================================================================
// Errors
// ============================================================================

#[test_case("x += 1;", ErrorCode::UndefinedVariable; "undeclared")]
#[test_case("const int X = 1;\nX += 1;", ErrorCode::CannotAssignToConstant; "constant")]
fn test_compound_errors(source: &str, expected: ErrorCode) {
    let compilation = compile(source).unwrap();
    let codes: Vec<_> = compilation.analysis.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, vec![expected]);
}

#[test]
fn test_constant_value_survives_compound() {
    let compilation = compile("const int X = 1;\nX *= 5;").unwrap();
    assert_eq!(
        compilation.analysis.table.resolve("X").unwrap().value(),
        Some(&Value::Int(1))
    );
}

#[test]
fn test_compound_missing_operand() {
    let err = compile("int x;\nx += ;").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ExpectedExpression);
}

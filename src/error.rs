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

//! Diagnostics for the Scopec front-end.
//!
//! Lexical, syntax and structural errors abort a run and travel as the
//! `Err` side of a [`Result`]. Semantic errors are gathered in [`Errors`]
//! while parsing goes on; an aborted run hands them back in a [`Failure`]
//! next to the error that stopped it. Warnings never change the outcome.

use std::fmt::Write;

use thiserror::Error;

/// Byte range of a token or construct, plus the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// 1-based.
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }

    /// Width in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The smallest span covering `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span::new(
            self.start.min(other.start),
            self.end.max(other.end),
            self.line.min(other.line),
        )
    }
}

/// Error codes for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexical errors (E0xx)
    InvalidCharacter,
    UnterminatedString,
    InvalidEscapeSequence,
    IntegerOutOfRange,
    InvalidDecimalLiteral,

    // Syntax errors (E1xx)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedSemicolon,
    ExpectedConstantValue,
    NestingTooDeep,

    // Block structure (E15x)
    UnclosedBlock,
    UnbalancedScopeExit,

    // Semantic errors (E2xx)
    UndefinedVariable,
    VariableAlreadyDefined,
    CannotAssignToConstant,
}

impl ErrorCode {
    /// The code as printed in diagnostics, e.g. `E201`.
    pub fn code(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            InvalidCharacter => "E001",
            UnterminatedString => "E010",
            InvalidEscapeSequence => "E012",
            IntegerOutOfRange => "E020",
            InvalidDecimalLiteral => "E025",

            UnexpectedToken => "E100",
            UnexpectedEndOfFile => "E101",
            ExpectedExpression => "E103",
            ExpectedStatement => "E104",
            ExpectedIdentifier => "E105",
            ExpectedSemicolon => "E107",
            ExpectedConstantValue => "E122",
            NestingTooDeep => "E130",

            UnclosedBlock => "E150",
            UnbalancedScopeExit => "E151",

            UndefinedVariable => "E200",
            VariableAlreadyDefined => "E201",
            CannotAssignToConstant => "E202",
        }
    }

    /// Semantic errors are collected; every other kind aborts the run.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            ErrorCode::UndefinedVariable
                | ErrorCode::VariableAlreadyDefined
                | ErrorCode::CannotAssignToConstant
        )
    }

    /// Mismatched `{` / `}`.
    pub fn is_structural(&self) -> bool {
        matches!(self, ErrorCode::UnclosedBlock | ErrorCode::UnbalancedScopeExit)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A diagnostic tied to a place in the source.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Printed below the source excerpt.
    pub hint: Option<String>,
}

impl CompileError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// The line the error was reported on.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// Result of a front-end stage that can fail fatally.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Warning codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// A variable was declared but never read.
    UnusedVariable,
}

impl WarningCode {
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnusedVariable => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileWarning {
    pub code: WarningCode,
    pub message: String,
    pub span: Span,
}

impl CompileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }
}

/// Where a byte offset sits in the source, for rendering excerpts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// The full text of that line, without its newline.
    pub line_content: String,
}

impl SourceLocation {
    /// Locate `offset`, clamped to the source and moved back onto a
    /// character boundary.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = (0..=offset.min(source.len()))
            .rev()
            .find(|&i| source.is_char_boundary(i))
            .unwrap_or(0);

        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);

        Self {
            line: 1 + source[..line_start].matches('\n').count(),
            column: 1 + source[line_start..offset].chars().count(),
            line_content: source[line_start..line_end].to_string(),
        }
    }
}

/// Append the `-->` location line, the source line and a caret marker.
fn push_context(out: &mut String, source: &str, span: &Span, filename: &str) {
    let loc = SourceLocation::from_offset(source, span.start);
    let gutter = " ".repeat(loc.line.to_string().len());
    let indent = loc.column - 1;
    let available = loc.line_content.len().saturating_sub(indent).max(1);
    let carets = "^".repeat(span.len().clamp(1, available));

    let _ = writeln!(out, "  --> {}:{}:{}", filename, loc.line, loc.column);
    let _ = writeln!(out, "{} |", gutter);
    let _ = writeln!(out, "{} | {}", loc.line, loc.line_content);
    let _ = writeln!(out, "{} | {}{}", gutter, " ".repeat(indent), carets);
}

/// Render an error with its source excerpt and optional hint.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let mut out = format!("error[{}]: {}\n", error.code_str(), error.message);
    push_context(&mut out, source, &error.span, filename.unwrap_or("<input>"));

    if let Some(hint) = &error.hint {
        let gutter = " ".repeat(error.span.line.to_string().len());
        let _ = writeln!(out, "{} = hint: {}", gutter, hint);
    }
    out
}

/// Render a warning with its source excerpt.
pub fn format_warning(warning: &CompileWarning, source: &str, filename: Option<&str>) -> String {
    let mut out = format!("warning[{}]: {}\n", warning.code, warning.message);
    push_context(&mut out, source, &warning.span, filename.unwrap_or("<input>"));
    out
}

/// Semantic errors in the order they were found.
#[derive(Debug, Default, Clone)]
pub struct Errors(Vec<CompileError>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: CompileError) {
        self.0.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompileError> {
        self.0.iter()
    }

    /// The errors as `(line, message)` pairs.
    pub fn lines(&self) -> Vec<(usize, String)> {
        self.0
            .iter()
            .map(|e| (e.line(), e.message.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a CompileError;
    type IntoIter = std::slice::Iter<'a, CompileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A run that stopped on a fatal error.
///
/// `errors` holds the semantic errors recorded before the parse stopped.
#[derive(Debug, Clone, Error)]
#[error("{fatal}")]
pub struct Failure {
    pub fatal: CompileError,
    pub errors: Errors,
}

impl Failure {
    pub fn new(fatal: CompileError, errors: Errors) -> Self {
        Self { fatal, errors }
    }

    /// Code of the error that stopped the run.
    pub fn code(&self) -> ErrorCode {
        self.fatal.code
    }

    /// Every diagnostic, recorded semantic errors first.
    pub fn all(&self) -> impl Iterator<Item = &CompileError> {
        self.errors.iter().chain(std::iter::once(&self.fatal))
    }
}

impl From<CompileError> for Failure {
    fn from(fatal: CompileError) -> Self {
        Self::new(fatal, Errors::new())
    }
}

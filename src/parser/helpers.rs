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

//! Parser helper methods for token stream navigation and error handling.
//!
//! This module provides utility methods for the parser including:
//! - Token stream navigation (peek, advance, check)
//! - Token matching and expectation
//! - Fatal error creation and semantic error recording

use tracing::debug;

use super::{Parser, MAX_NESTING_DEPTH};
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// Trait for parser helper operations.
pub trait ParserHelpers<'a> {
    /// Check if we've reached the end of the token stream.
    fn is_at_end(&self) -> bool;

    /// Peek at the current token without advancing.
    fn peek(&self) -> Option<&Token>;

    /// Peek at the current token's span.
    fn peek_span(&self) -> Option<Span>;

    /// Get the previous token's span (for error reporting).
    fn previous_span(&self) -> Span;

    /// Advance to the next token and return the current one.
    fn advance(&mut self) -> Option<(Token, Span)>;

    /// Check if the current token matches the expected type.
    fn check(&self, expected: &Token) -> bool;

    /// Consume the current token if it matches the expected type.
    fn match_token(&mut self, expected: &Token) -> bool;

    /// Expect the current token to match, or return an error.
    fn expect(&mut self, expected: &Token, message: &str) -> Result<(Token, Span), CompileError>;

    /// Expect an identifier and return its name and span.
    fn expect_identifier(&mut self, message: &str) -> Result<(String, Span), CompileError>;

    /// Expect the `;` that ends a statement.
    fn expect_semicolon(&mut self, context: &str) -> Result<Span, CompileError>;

    /// Create an error at the current position.
    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError;

    /// Record a recoverable semantic error and keep parsing.
    fn record(&mut self, code: ErrorCode, message: impl Into<String>, span: Span);
}

impl<'a> ParserHelpers<'a> for Parser<'a> {
    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(t, _)| t)
    }

    fn peek_span(&self) -> Option<Span> {
        self.tokens.get(self.position).map(|(_, s)| *s)
    }

    fn previous_span(&self) -> Span {
        if self.position > 0 {
            self.tokens[self.position - 1].1
        } else if let Some((_, span)) = self.tokens.first() {
            *span
        } else {
            Span::new(0, 0, 1)
        }
    }

    fn advance(&mut self) -> Option<(Token, Span)> {
        let result = self.tokens.get(self.position).cloned()?;
        self.position += 1;
        Some(result)
    }

    fn check(&self, expected: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    fn match_token(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token, message: &str) -> Result<(Token, Span), CompileError> {
        if self.check(expected) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.unexpected(ErrorCode::UnexpectedToken, message))
    }

    fn expect_identifier(&mut self, message: &str) -> Result<(String, Span), CompileError> {
        match self.peek() {
            Some(Token::Identifier(_)) => match self.advance() {
                Some((Token::Identifier(name), span)) => Ok((name, span)),
                _ => Err(self.unexpected(ErrorCode::ExpectedIdentifier, message)),
            },
            _ => Err(self.unexpected(ErrorCode::ExpectedIdentifier, message)),
        }
    }

    fn expect_semicolon(&mut self, context: &str) -> Result<Span, CompileError> {
        if self.check(&Token::Semicolon) {
            if let Some((_, span)) = self.advance() {
                return Ok(span);
            }
        }
        let message = format!("Expected ';' {}", context);
        Err(self.unexpected(ErrorCode::ExpectedSemicolon, &message))
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> CompileError {
        let span = self.peek_span().unwrap_or_else(|| self.previous_span());
        CompileError::new(code, message, span)
    }

    fn record(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let error = CompileError::new(code, message, span);
        debug!(code = %error.code, line = span.line, message = %error.message, "semantic error");
        self.errors.push(error);
    }
}

impl<'a> Parser<'a> {
    /// Run `parse` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(super) fn nested<T>(
        &mut self,
        what: &str,
        parse: impl FnOnce(&mut Self) -> Result<T, CompileError>,
    ) -> Result<T, CompileError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self
                .error(
                    ErrorCode::NestingTooDeep,
                    format!("{} nested more than {} levels deep", what, MAX_NESTING_DEPTH),
                )
                .with_hint("split the construct into smaller pieces"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// An error that names the token found instead of the expected one.
    ///
    /// Running out of tokens is reported as unexpected end of file.
    pub(super) fn unexpected(&self, code: ErrorCode, message: &str) -> CompileError {
        match self.peek() {
            Some(found) => self.error(code, format!("{}, found {}", message, found.name())),
            None => self.error(
                ErrorCode::UnexpectedEndOfFile,
                format!("{}, found end of file", message),
            ),
        }
    }
}

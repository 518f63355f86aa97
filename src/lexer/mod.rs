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

//! Lexer module for the scopec compiler.
//!
//! This module tokenizes source code into a stream of tokens.
//! It handles:
//! - Keywords and identifiers
//! - Integer and decimal literals
//! - String literals in single or double quotes
//! - Operators and delimiters
//! - Whitespace and `//` line comments (skipped)

mod literals;
mod tokens;

pub use literals::LexError;
pub use tokens::{Token, TokenCategory};

use logos::Logos;
use tracing::trace;

use crate::error::{CompileError, Span};

/// Tracks the line number while walking token offsets forward.
struct LineCounter<'source> {
    source: &'source str,
    offset: usize,
    line: usize,
}

impl<'source> LineCounter<'source> {
    fn new(source: &'source str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
        }
    }

    /// The line containing byte `offset`. Offsets must not decrease.
    fn line_at(&mut self, offset: usize) -> usize {
        let end = offset.min(self.source.len());
        if end > self.offset {
            self.line += self.source.as_bytes()[self.offset..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.offset = end;
        }
        self.line
    }
}

/// Tokenize the entire source code.
///
/// Stops at the first lexical error. There is no end-of-file token; the
/// parser treats the end of the vector as end of input.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut lexer = Token::lexer(source);
    let mut lines = LineCounter::new(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end, lines.line_at(range.start));
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(error) => {
                return Err(CompileError::new(
                    error.code(),
                    error.message(lexer.slice()),
                    span,
                ));
            }
        }
    }

    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

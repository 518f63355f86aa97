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

//! Literal scanning callbacks for the lexer.
//!
//! This module handles scanning of:
//! - Integer literals (range-checked)
//! - Decimal literals
//! - String literals with escape sequences

use logos::Lexer;

use super::Token;
use crate::error::ErrorCode;

/// Why a piece of input could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// No token starts with this character.
    #[default]
    InvalidCharacter,
    /// A string literal ran into a newline or the end of input.
    UnterminatedString,
    /// A backslash followed by an unsupported character.
    InvalidEscape(char),
    /// An integer literal does not fit in 64 bits.
    IntegerOutOfRange,
    /// A decimal literal without digits after the point, or too large
    /// for a 64-bit float.
    InvalidDecimal,
}

impl LexError {
    /// The diagnostic code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidCharacter => ErrorCode::InvalidCharacter,
            LexError::UnterminatedString => ErrorCode::UnterminatedString,
            LexError::InvalidEscape(_) => ErrorCode::InvalidEscapeSequence,
            LexError::IntegerOutOfRange => ErrorCode::IntegerOutOfRange,
            LexError::InvalidDecimal => ErrorCode::InvalidDecimalLiteral,
        }
    }

    /// A message for the offending `slice` of source text.
    pub fn message(&self, slice: &str) -> String {
        match self {
            LexError::InvalidCharacter => {
                let c = slice.chars().next().unwrap_or(' ');
                format!("Unexpected character '{}'", c.escape_default())
            }
            LexError::UnterminatedString => "Unterminated string literal".to_string(),
            LexError::InvalidEscape(c) => format!("Invalid escape sequence '\\{}'", c),
            LexError::IntegerOutOfRange => {
                format!("Integer literal '{}' is out of range", slice)
            }
            LexError::InvalidDecimal => format!("Invalid decimal literal '{}'", slice),
        }
    }
}

pub(super) fn integer(lex: &mut Lexer<Token>) -> Result<i64, LexError> {
    lex.slice()
        .parse()
        .map_err(|_| LexError::IntegerOutOfRange)
}

pub(super) fn decimal(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let text = lex.slice();
    let finite = text.parse::<f64>().is_ok_and(f64::is_finite);
    if text.ends_with('.') || !finite {
        return Err(LexError::InvalidDecimal);
    }
    Ok(text.to_string())
}

/// Resolve the character after a backslash.
fn escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Scan the rest of a string literal after its opening quote.
///
/// The literal ends at the first unescaped quote of the same kind and may
/// not span lines.
pub(super) fn string(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let quote = lex.slice().chars().next().unwrap_or('"');
    let rest = lex.remainder();
    let mut value = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                lex.bump(i);
                return Err(LexError::UnterminatedString);
            }
            '\\' => match chars.next() {
                Some((j, e)) => match escape(e) {
                    Some(resolved) => value.push(resolved),
                    None => {
                        lex.bump(j + e.len_utf8());
                        return Err(LexError::InvalidEscape(e));
                    }
                },
                None => break,
            },
            c if c == quote => {
                lex.bump(i + 1);
                return Ok(value);
            }
            c => value.push(c),
        }
    }

    lex.bump(rest.len());
    Err(LexError::UnterminatedString)
}

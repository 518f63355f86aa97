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

//! Token definitions for the scopec language.

use logos::Logos;

use super::literals::{decimal, integer, string, LexError};
use crate::symbols::DataType;

/// A token in the scopec language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"([ \t\r\n\f]|//[^\n]*)+")]
pub enum Token {
    // Literals
    /// Integer literal.
    #[regex(r"[0-9]+", integer)]
    Integer(i64),
    /// Decimal literal, kept as written (e.g. `3.14`).
    #[regex(r"[0-9]+\.[0-9]*", decimal)]
    Decimal(String),
    /// String literal in single or double quotes, escapes resolved.
    #[token("\"", string)]
    #[token("'", string)]
    String(String),
    /// Identifier (variable name).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Type keywords
    /// `int` - integer type.
    #[token("int")]
    Int,
    /// `float` - floating-point type.
    #[token("float")]
    Float,
    /// `string` - string type.
    #[token("string")]
    StringType,
    /// `bool` - boolean type.
    #[token("bool")]
    Bool,

    // Other keywords
    /// `const` - constant declaration.
    #[token("const")]
    Const,
    /// `if` - conditional statement.
    #[token("if")]
    If,
    /// `else` - else branch.
    #[token("else")]
    Else,
    /// `while` - while loop.
    #[token("while")]
    While,
    /// `true` - boolean true value.
    #[token("true")]
    True,
    /// `false` - boolean false value.
    #[token("false")]
    False,

    // Arithmetic operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Comparison operators
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,

    // Logical operators
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,

    // Assignment operators
    #[token("=")]
    Equal,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,

    // Delimiters
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
}

/// Coarse token classes, as shown in token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    Delimiter,
}

impl TokenCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::String => "STRING",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Delimiter => "DELIMITER",
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    /// Check if this token is a type keyword.
    pub fn is_type(&self) -> bool {
        self.data_type().is_some()
    }

    /// The declared type named by a type keyword.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Token::Int => Some(DataType::Int),
            Token::Float => Some(DataType::Float),
            Token::StringType => Some(DataType::String),
            Token::Bool => Some(DataType::Bool),
            _ => None,
        }
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.is_type()
            || matches!(
                self,
                Token::Const | Token::If | Token::Else | Token::While | Token::True | Token::False
            )
    }

    /// Check if this token is an assignment operator.
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::PlusAssign
                | Token::MinusAssign
                | Token::StarAssign
                | Token::SlashAssign
        )
    }

    /// The binary operator a compound assignment applies (`+=` gives `+`).
    pub fn compound_operator(&self) -> Option<Token> {
        match self {
            Token::PlusAssign => Some(Token::Plus),
            Token::MinusAssign => Some(Token::Minus),
            Token::StarAssign => Some(Token::Star),
            Token::SlashAssign => Some(Token::Slash),
            _ => None,
        }
    }

    /// The class of this token.
    pub fn category(&self) -> TokenCategory {
        match self {
            Token::Integer(_) | Token::Decimal(_) => TokenCategory::Number,
            Token::String(_) => TokenCategory::String,
            Token::Identifier(_) => TokenCategory::Identifier,
            Token::LeftBrace
            | Token::RightBrace
            | Token::LeftParen
            | Token::RightParen
            | Token::LeftBracket
            | Token::RightBracket
            | Token::Semicolon
            | Token::Comma
            | Token::Colon
            | Token::Dot => TokenCategory::Delimiter,
            t if t.is_keyword() => TokenCategory::Keyword,
            _ => TokenCategory::Operator,
        }
    }

    /// Source spelling of keywords, operators and delimiters.
    ///
    /// `None` for literals and identifiers, whose text varies.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            Token::Integer(_) | Token::Decimal(_) | Token::String(_) | Token::Identifier(_) => {
                return None
            }
            Token::Int => "int",
            Token::Float => "float",
            Token::StringType => "string",
            Token::Bool => "bool",
            Token::Const => "const",
            Token::If => "if",
            Token::Else => "else",
            Token::While => "while",
            Token::True => "true",
            Token::False => "false",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::EqualEqual => "==",
            Token::BangEqual => "!=",
            Token::Less => "<",
            Token::Greater => ">",
            Token::LessEqual => "<=",
            Token::GreaterEqual => ">=",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::Bang => "!",
            Token::Equal => "=",
            Token::PlusAssign => "+=",
            Token::MinusAssign => "-=",
            Token::StarAssign => "*=",
            Token::SlashAssign => "/=",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Dot => ".",
        };
        Some(text)
    }

    /// How the token is named in diagnostics: the token class for
    /// literals and identifiers, the quoted spelling otherwise.
    pub fn name(&self) -> String {
        match (self, self.spelling()) {
            (_, Some(text)) => format!("'{}'", text),
            (Token::Integer(_), None) => "integer".to_string(),
            (Token::Decimal(_), None) => "decimal".to_string(),
            (Token::String(_), None) => "string".to_string(),
            _ => "identifier".to_string(),
        }
    }

    /// The token as it would be written in source code.
    ///
    /// String literals are re-quoted with their escapes restored.
    pub fn lexeme(&self) -> String {
        match self {
            Token::Integer(n) => n.to_string(),
            Token::Decimal(s) | Token::Identifier(s) => s.clone(),
            Token::String(s) => format!("\"{}\"", s.escape_default()),
            other => other.spelling().unwrap_or_default().to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Integer(_) | Token::Decimal(_) | Token::Identifier(_) => {
                f.write_str(&self.lexeme())
            }
            _ => f.write_str(&self.name()),
        }
    }
}

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

//! Parser module for the scopec compiler.
//!
//! This module walks a token stream with recursive descent and populates
//! a [`SymbolTable`] as it goes. There is no syntax tree: declarations,
//! assignments and identifier reads act on the table directly.
//!
//! Semantic problems (undeclared names, duplicates, writes to constants)
//! are collected and parsing continues. Lexical, syntax and structural
//! problems stop the parse with a [`Failure`] that still carries the
//! semantic errors found up to that point.
//!
//! Blocks and sub-expressions may nest at most [`MAX_NESTING_DEPTH`]
//! levels deep.
//!
//! # Module Structure
//!
//! - `blocks` - Blocks, if/else and while (BlockParser trait)
//! - `expressions` - Expression parsing (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Declarations and assignments (StatementParser trait)

// Submodules
pub mod blocks;
pub mod expressions;
pub mod helpers;
pub mod statements;

// Internal imports from submodules
use helpers::ParserHelpers;
use statements::StatementParser;

pub use expressions::Expression;

use tracing::debug;

use crate::error::{Errors, Failure, Span};
use crate::lexer::Token;
use crate::symbols::SymbolTable;

/// Deepest nesting of blocks and sub-expressions the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
    /// The table being populated.
    pub(crate) table: SymbolTable,
    /// Semantic errors found so far, in source order.
    pub(crate) errors: Errors,
    /// Open blocks and sub-expressions.
    pub(crate) depth: usize,
}

/// The outcome of analyzing a token stream.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The populated symbol table.
    pub table: SymbolTable,
    /// Recoverable semantic errors, in source order.
    pub errors: Errors,
    /// Number of tokens analyzed.
    pub token_count: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with an empty symbol table.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self::with_table(tokens, SymbolTable::new())
    }

    /// Create a parser that populates an existing table.
    pub fn with_table(tokens: &'a [(Token, Span)], table: SymbolTable) -> Self {
        Self {
            tokens,
            position: 0,
            table,
            errors: Errors::new(),
            depth: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program.
    pub fn parse(mut self) -> Result<Analysis, Failure> {
        while !self.is_at_end() {
            if let Err(fatal) = self.parse_statement() {
                debug!(
                    code = %fatal.code,
                    line = fatal.line(),
                    recorded = self.errors.len(),
                    "analysis stopped"
                );
                return Err(Failure::new(fatal, self.errors));
            }
        }

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "analysis finished"
        );

        Ok(Analysis {
            token_count: self.tokens.len(),
            table: self.table,
            errors: self.errors,
        })
    }
}

/// Analyze a token stream into a populated symbol table.
pub fn analyze(tokens: &[(Token, Span)]) -> Result<Analysis, Failure> {
    Parser::new(tokens).parse()
}

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

//! Block and control flow parsing for the parser.
//!
//! Every `{ ... }` opens a fresh child scope of the current scope and
//! closes it again at the matching `}`. The bodies of `if`, `else` and
//! `while` are ordinary blocks.

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for block parsing.
pub trait BlockParser {
    /// Parse a block of statements in a new scope.
    fn parse_block(&mut self) -> Result<(), CompileError>;

    /// Parse an if statement with optional else branch.
    fn parse_if_statement(&mut self) -> Result<(), CompileError>;

    /// Parse a while loop.
    fn parse_while_statement(&mut self) -> Result<(), CompileError>;

    /// Handle a `}` that closes no block.
    fn parse_stray_close(&mut self) -> Result<(), CompileError>;
}

impl<'a> Parser<'a> {
    /// Parse `( expr )` after `if` or `while`.
    fn parse_condition(&mut self, keyword: &str) -> Result<(), CompileError> {
        self.expect(
            &Token::LeftParen,
            &format!("Expected '(' after '{}'", keyword),
        )?;
        self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after condition")?;
        Ok(())
    }
}

impl<'a> BlockParser for Parser<'a> {
    fn parse_block(&mut self) -> Result<(), CompileError> {
        self.nested("Blocks", |parser| {
            let (_, open) = parser.expect(&Token::LeftBrace, "Expected '{'")?;
            parser.table.enter_scope();

            loop {
                match parser.peek() {
                    Some(Token::RightBrace) => {
                        parser.advance();
                        break;
                    }
                    Some(_) => parser.parse_statement()?,
                    None => {
                        return Err(CompileError::new(
                            ErrorCode::UnclosedBlock,
                            "Unclosed block: expected '}' before end of file",
                            open,
                        )
                        .with_hint("the block opened here is never closed"));
                    }
                }
            }

            parser.table.exit_scope().map_err(|err| {
                CompileError::new(
                    ErrorCode::UnbalancedScopeExit,
                    err.to_string(),
                    parser.previous_span(),
                )
            })?;
            Ok(())
        })
    }

    fn parse_if_statement(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::If, "Expected 'if'")?;
        self.parse_condition("if")?;
        self.parse_block()?;

        // `else if` chains are walked in a loop, not by recursion.
        while self.match_token(&Token::Else) {
            if !self.match_token(&Token::If) {
                self.parse_block()?;
                break;
            }
            self.parse_condition("if")?;
            self.parse_block()?;
        }

        Ok(())
    }

    fn parse_while_statement(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::While, "Expected 'while'")?;
        self.parse_condition("while")?;
        self.parse_block()
    }

    fn parse_stray_close(&mut self) -> Result<(), CompileError> {
        let span = self.peek_span().unwrap_or_else(|| self.previous_span());
        self.advance();
        self.table.exit_scope().map_err(|_| {
            CompileError::new(
                ErrorCode::UnbalancedScopeExit,
                "Unmatched '}': no open block to close",
                span,
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;
    use crate::lexer::tokenize;
    use crate::parser::analyze;
    use crate::symbols::Value;

    #[test]
    fn test_block_opens_scope() {
        let analysis = analyze(&tokenize("int a = 5;\n{\n  int a = 100;\n}").unwrap()).unwrap();
        let table = &analysis.table;
        let block = table.scope_by_path("global.block1").unwrap();

        assert_eq!(table.resolve("a").unwrap().value(), Some(&Value::Int(5)));
        assert_eq!(
            table.resolve_from("a", block).unwrap().value(),
            Some(&Value::Int(100))
        );
        assert!(table.is_global_scope());
        assert_eq!(table.statistics().total_scopes, 2);
        assert_eq!(table.statistics().total_symbols, 2);
    }

    #[test]
    fn test_nested_and_sibling_blocks() {
        let analysis = analyze(&tokenize("{ { } } { }").unwrap()).unwrap();
        let table = &analysis.table;
        assert!(table.scope_by_path("global.block1").is_some());
        assert!(table.scope_by_path("global.block1.block1").is_some());
        assert!(table.scope_by_path("global.block2").is_some());
        assert_eq!(table.scope_count(), 4);
    }

    #[test]
    fn test_if_else_scopes() {
        let source = "int x = 1;\nif (x > 0) { int y = 1; } else { int y = 2; }";
        let analysis = analyze(&tokenize(source).unwrap()).unwrap();
        let table = &analysis.table;
        assert!(analysis.errors.is_empty());
        assert!(table.resolve("x").unwrap().is_used());
        assert_eq!(table.scope_count(), 3);
        assert!(table.resolve("y").is_none());
    }

    #[test]
    fn test_else_if_chain() {
        let source = "int x = 1;\nif (x == 0) { } else if (x == 1) { } else { }";
        let analysis = analyze(&tokenize(source).unwrap()).unwrap();
        assert_eq!(analysis.table.scope_count(), 4);
    }

    #[test]
    fn test_long_else_if_chain() {
        let mut source = String::from("int x = 1;\nif (x == 0) { }");
        for n in 1..2000 {
            source.push_str(&format!(" else if (x == {}) {{ }}", n));
        }
        source.push_str(" else { }");
        let analysis = analyze(&tokenize(&source).unwrap()).unwrap();
        assert_eq!(analysis.table.scope_count(), 2002);
    }

    #[test]
    fn test_while_loop() {
        let source = "int i = 0;\nwhile (i < 10) {\n  i += 1;\n}";
        let analysis = analyze(&tokenize(source).unwrap()).unwrap();
        assert!(analysis.errors.is_empty());
        assert_eq!(analysis.table.scope_count(), 2);
    }

    #[test]
    fn test_unclosed_block() {
        let err = analyze(&tokenize("{\n  int x;\n").unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnclosedBlock);
        assert_eq!(err.fatal.line(), 1);
    }

    #[test]
    fn test_stray_close_brace() {
        let err = analyze(&tokenize("int x;\n}").unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnbalancedScopeExit);
        assert_eq!(err.fatal.line(), 2);
    }

    #[test]
    fn test_condition_requires_parens() {
        let err = analyze(&tokenize("int x;\nif x { }").unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_deep_blocks_rejected() {
        let source = format!("int x;\n{}{}", "{".repeat(2000), "}".repeat(2000));
        let err = analyze(&tokenize(&source).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NestingTooDeep);
        assert_eq!(err.fatal.line(), 2);
    }
}

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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Statement dispatch
//! - Variable and constant declarations
//! - Plain and compound assignments

use super::blocks::BlockParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;
use crate::symbols::{SymbolEntry, SymbolError, SymbolUpdate, Value};

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement.
    fn parse_statement(&mut self) -> Result<(), CompileError>;

    /// Parse a declaration: `const? type name (= expr)? ;`.
    fn parse_declaration(&mut self) -> Result<(), CompileError>;

    /// Parse an assignment: `name op expr ;`.
    fn parse_assignment(&mut self) -> Result<(), CompileError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<(), CompileError> {
        match self.peek() {
            Some(Token::Const) => self.parse_declaration(),
            Some(t) if t.is_type() => self.parse_declaration(),
            Some(Token::Identifier(_)) => self.parse_assignment(),
            Some(Token::LeftBrace) => self.parse_block(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::RightBrace) => self.parse_stray_close(),
            Some(Token::Semicolon) => {
                self.advance();
                Ok(())
            }
            Some(other) => Err(self.error(
                ErrorCode::ExpectedStatement,
                format!("Expected statement, found {}", other.name()),
            )),
            None => Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected statement, found end of file",
            )),
        }
    }

    fn parse_declaration(&mut self) -> Result<(), CompileError> {
        let is_constant = self.match_token(&Token::Const);

        let declared_type = match self.peek().and_then(Token::data_type) {
            Some(ty) => {
                self.advance();
                ty
            }
            None => return Err(self.unexpected(ErrorCode::UnexpectedToken, "Expected type name")),
        };

        let (name, span) = self.expect_identifier(&format!(
            "Expected variable name after type '{}'",
            declared_type
        ))?;

        let initializer = if self.match_token(&Token::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        if is_constant && initializer.is_none() {
            return Err(CompileError::new(
                ErrorCode::ExpectedConstantValue,
                format!("Constant '{}' must be initialized", name),
                span,
            )
            .with_hint(format!("write 'const {} {} = <value>;'", declared_type, name)));
        }

        self.expect_semicolon(&format!("after declaration of '{}'", name))?;

        let mut entry = SymbolEntry::new(name.as_str(), declared_type, span.line)
            .with_span(span)
            .with_optional_value(initializer.map(|e| e.into_value(declared_type)));
        if is_constant {
            entry = entry.constant();
        }

        if self.table.define(entry).is_err() {
            self.record(
                ErrorCode::VariableAlreadyDefined,
                format!("Duplicate declaration of variable '{}'", name),
                span,
            );
        }

        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), CompileError> {
        let (name, span) = self.expect_identifier("Expected variable name")?;

        let op = match self.peek() {
            Some(t) if t.is_assignment() => t.clone(),
            _ => {
                return Err(self.unexpected(
                    ErrorCode::UnexpectedToken,
                    &format!("Expected assignment operator after '{}'", name),
                ))
            }
        };
        self.advance();

        // A compound assignment reads its target; a plain one does not.
        let target = if op == Token::Equal {
            self.table.resolve(&name)
        } else {
            self.table.lookup(&name)
        }
        .map(|symbol| symbol.declared_type());

        if target.is_none() {
            self.record(
                ErrorCode::UndefinedVariable,
                format!("Undeclared variable '{}'", name),
                span,
            );
        }

        let value = self.parse_expression()?;
        self.expect_semicolon("after assignment")?;

        let Some(declared_type) = target else {
            return Ok(());
        };

        let value = match op.compound_operator() {
            Some(binary) => Value::Expr(format!(
                "{} {} {}",
                name,
                binary.lexeme(),
                value.grouped()
            )),
            None => value.into_value(declared_type),
        };

        match self.table.update(&name, SymbolUpdate::assign(value)) {
            Ok(()) => {}
            Err(SymbolError::ConstantMutation(_)) => self.record(
                ErrorCode::CannotAssignToConstant,
                format!("Cannot assign to constant '{}'", name),
                span,
            ),
            Err(_) => self.record(
                ErrorCode::UndefinedVariable,
                format!("Undeclared variable '{}'", name),
                span,
            ),
        }

        Ok(())
    }
}

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

//! Expression parsing for the parser.
//!
//! This module provides expression parsing functionality:
//! - One method per precedence level for binary operators
//! - Unary operators
//! - Primary expressions (literals, identifiers, grouping)
//!
//! Expressions are not evaluated. Each one is rendered back to source
//! text, and every identifier read marks its symbol as used.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;
use crate::symbols::{DataType, Value};

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The expression rendered as source text, e.g. `x + 5`.
    pub text: String,
    /// The value if the expression is a single literal.
    pub literal: Option<Value>,
    /// Whether the text needs no parentheses when embedded.
    pub atomic: bool,
    /// The source span covered.
    pub span: Span,
}

impl Expression {
    fn atom(text: String, literal: Option<Value>, span: Span) -> Self {
        Self {
            text,
            literal,
            atomic: true,
            span,
        }
    }

    fn binary(left: Expression, op: &Token, right: Expression) -> Self {
        Self {
            text: format!("{} {} {}", left.text, op.lexeme(), right.text),
            literal: None,
            atomic: false,
            span: left.span.merge(&right.span),
        }
    }

    /// The text, parenthesized unless it is atomic.
    pub fn grouped(&self) -> String {
        if self.atomic {
            self.text.clone()
        } else {
            format!("({})", self.text)
        }
    }

    /// The value to store in a symbol of type `ty`.
    pub fn into_value(self, ty: DataType) -> Value {
        match self.literal {
            Some(literal) => literal.coerce_to(ty),
            None => Value::Expr(self.text),
        }
    }
}

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression.
    fn parse_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse an `||` expression.
    fn parse_or_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse an `&&` expression.
    fn parse_and_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse an equality expression (`==`, `!=`).
    fn parse_equality_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse a comparison expression (`<`, `>`, `<=`, `>=`).
    fn parse_comparison_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse an additive expression.
    fn parse_additive_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse a multiplicative expression.
    fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse a unary expression.
    fn parse_unary_expression(&mut self) -> Result<Expression, CompileError>;

    /// Parse a primary expression.
    fn parse_primary_expression(&mut self) -> Result<Expression, CompileError>;
}

impl<'a> Parser<'a> {
    /// Parse `operand (op operand)*` for any of `operators`.
    fn parse_binary_level(
        &mut self,
        operators: &[Token],
        operand: fn(&mut Self) -> Result<Expression, CompileError>,
    ) -> Result<Expression, CompileError> {
        let mut left = operand(self)?;

        while let Some(op) = self.peek().filter(|t| operators.contains(*t)).cloned() {
            self.advance();
            let right = operand(self)?;
            left = Expression::binary(left, &op, right);
        }

        Ok(left)
    }
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_or_expression()
    }

    fn parse_or_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(&[Token::OrOr], Self::parse_and_expression)
    }

    fn parse_and_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(&[Token::AndAnd], Self::parse_equality_expression)
    }

    fn parse_equality_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(
            &[Token::EqualEqual, Token::BangEqual],
            Self::parse_comparison_expression,
        )
    }

    fn parse_comparison_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(
            &[
                Token::Less,
                Token::Greater,
                Token::LessEqual,
                Token::GreaterEqual,
            ],
            Self::parse_additive_expression,
        )
    }

    fn parse_additive_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(
            &[Token::Plus, Token::Minus],
            Self::parse_multiplicative_expression,
        )
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression, CompileError> {
        self.parse_binary_level(
            &[Token::Star, Token::Slash, Token::Percent],
            Self::parse_unary_expression,
        )
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, CompileError> {
        let op_span = match self.peek() {
            Some(Token::Minus) | Some(Token::Bang) => self.peek_span(),
            _ => None,
        };
        let Some(op_span) = op_span else {
            return self.parse_primary_expression();
        };
        let (op, _) = self
            .advance()
            .ok_or_else(|| self.error(ErrorCode::UnexpectedEndOfFile, "Expected expression"))?;
        let operand = self.nested("Expressions", Self::parse_unary_expression)?;

        // Negative number literals keep their value.
        let literal = match (&op, &operand.literal) {
            (Token::Minus, Some(Value::Int(n))) => Some(Value::Int(-n)),
            (Token::Minus, Some(Value::Float(x))) => Some(Value::Float(-x)),
            _ => None,
        };

        Ok(Expression {
            text: format!("{}{}", op.lexeme(), operand.grouped()),
            atomic: literal.is_some(),
            literal,
            span: op_span.merge(&operand.span),
        })
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, CompileError> {
        let Some((token, span)) = self.advance() else {
            return Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected expression, found end of file",
            ));
        };

        match token {
            Token::Integer(n) => Ok(Expression::atom(n.to_string(), Some(Value::Int(n)), span)),
            Token::Decimal(text) => {
                let value = text.parse::<f64>().map_err(|_| {
                    CompileError::new(
                        ErrorCode::InvalidDecimalLiteral,
                        format!("Invalid decimal literal '{}'", text),
                        span,
                    )
                })?;
                Ok(Expression::atom(text, Some(Value::Float(value)), span))
            }
            Token::String(s) => {
                let text = Token::String(s.clone()).lexeme();
                Ok(Expression::atom(text, Some(Value::Str(s)), span))
            }
            Token::True => Ok(Expression::atom("true".into(), Some(Value::Bool(true)), span)),
            Token::False => Ok(Expression::atom("false".into(), Some(Value::Bool(false)), span)),
            Token::Identifier(name) => {
                if self.table.lookup(&name).is_none() {
                    self.record(
                        ErrorCode::UndefinedVariable,
                        format!("Undeclared variable '{}'", name),
                        span,
                    );
                }
                Ok(Expression::atom(name, None, span))
            }
            Token::LeftParen => {
                let inner = self.nested("Expressions", Self::parse_expression)?;
                let (_, close) = self.expect(&Token::RightParen, "Expected ')' after expression")?;
                Ok(Expression::atom(
                    format!("({})", inner.text),
                    inner.literal,
                    span.merge(&close),
                ))
            }
            other => {
                self.position -= 1;
                Err(self.error(
                    ErrorCode::ExpectedExpression,
                    format!("Expected expression, found {}", other.name()),
                ))
            }
        }
    }
}

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

//! Symbol table entries.
//!
//! A [`SymbolEntry`] has an immutable identity (name, owning scope,
//! declaration line) and mutable metadata that only the
//! [`SymbolTable`](super::SymbolTable) changes.

use indexmap::IndexMap;
use serde::Serialize;

use super::scope::ScopeId;
use crate::error::Span;

/// The declared type of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// `int` - signed integer.
    Int,
    /// `float` - floating-point number.
    Float,
    /// `string` - text.
    String,
    /// `bool` - boolean.
    Bool,
}

impl DataType {
    /// The keyword spelling of this type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Bool => "bool",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value held by a symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer literal.
    Int(i64),
    /// Decimal literal.
    Float(f64),
    /// String literal (unquoted).
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// Any other initializer, kept as rendered source text.
    Expr(String),
}

impl Value {
    /// Adapt a literal to the declared type where no information is lost.
    ///
    /// Only `int` literals stored into a `float` are widened; everything
    /// else is returned unchanged.
    pub fn coerce_to(self, ty: DataType) -> Value {
        match (self, ty) {
            (Value::Int(n), DataType::Float) => Value::Float(n as f64),
            (value, _) => value,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Keeps the point on whole numbers: `2.0`, not `2`.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Expr(text) => write!(f, "{}", text),
        }
    }
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolEntry {
    name: String,
    #[serde(rename = "type")]
    declared_type: DataType,
    #[serde(skip)]
    scope: ScopeId,
    line: usize,
    value: Option<Value>,
    initialized: bool,
    used: bool,
    #[serde(rename = "constant")]
    is_constant: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, Value>,
    #[serde(skip)]
    span: Option<Span>,
}

impl SymbolEntry {
    /// Create a new, uninitialized variable entry.
    ///
    /// The owning scope is assigned when the entry is defined in a table.
    pub fn new(name: impl Into<String>, declared_type: DataType, line: usize) -> Self {
        Self {
            name: name.into(),
            declared_type,
            scope: ScopeId::GLOBAL,
            line,
            value: None,
            initialized: false,
            used: false,
            is_constant: false,
            attributes: IndexMap::new(),
            span: None,
        }
    }

    /// Give the entry an initial value. Marks it initialized.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self.initialized = true;
        self
    }

    /// Give the entry an optional initial value.
    pub fn with_optional_value(self, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.with_value(value),
            None => self,
        }
    }

    /// Declare the entry immutable.
    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    /// Attach an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Record the span of the declaring identifier.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> DataType {
        self.declared_type
    }

    /// The scope this entry lives in.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The line of the first declaration.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn is_constant(&self) -> bool {
        self.is_constant
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub(super) fn set_scope(&mut self, scope: ScopeId) {
        self.scope = scope;
    }

    pub(super) fn mark_used(&mut self) {
        self.used = true;
    }

    /// Apply a partial update. Constant checks happen in the table.
    pub(super) fn apply(&mut self, update: SymbolUpdate) {
        if let Some(initialized) = update.initialized {
            self.initialized = initialized;
        }
        if let Some(used) = update.used {
            self.used = used;
        }
        if let Some(is_constant) = update.is_constant {
            self.is_constant = is_constant;
        }
        self.attributes.extend(update.attributes);
        if let Some(value) = update.value {
            self.value = Some(value);
            self.initialized = true;
        }
    }
}

impl std::fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Symbol(name='{}', type='{}', scope={}, line={})",
            self.name, self.declared_type, self.scope, self.line
        )
    }
}

/// A typed partial update of a symbol's mutable metadata.
///
/// Fields left as `None` are not touched. Attributes are merged into the
/// existing map. A supplied value always leaves the entry initialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolUpdate {
    pub value: Option<Value>,
    pub initialized: Option<bool>,
    pub used: Option<bool>,
    pub is_constant: Option<bool>,
    pub attributes: IndexMap<String, Value>,
}

impl SymbolUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// An update that only assigns a new value.
    pub fn assign(value: Value) -> Self {
        Self::new().value(value)
    }

    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn initialized(mut self, initialized: bool) -> Self {
        self.initialized = Some(initialized);
        self
    }

    pub fn used(mut self, used: bool) -> Self {
        self.used = Some(used);
        self
    }

    pub fn constant(mut self, is_constant: bool) -> Self {
        self.is_constant = Some(is_constant);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Whether this update would change the stored value.
    pub fn changes_value(&self) -> bool {
        self.value.is_some()
    }
}

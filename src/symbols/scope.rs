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

//! Scope nodes of the symbol table.
//!
//! Scopes live in an arena owned by the [`SymbolTable`](super::SymbolTable)
//! and refer to each other by [`ScopeId`]. A scope is never removed once
//! created; leaving it only moves the table's cursor.

use indexmap::IndexMap;
use serde::Serialize;

use super::symbol::SymbolEntry;

/// Name of the root scope.
pub const GLOBAL_SCOPE: &str = "global";

/// Prefix of automatically numbered block scopes.
pub const BLOCK_PREFIX: &str = "block";

/// Index of a scope in the table's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct ScopeId(pub(crate) usize);

impl ScopeId {
    /// The root scope.
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// The arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A lexical scope in the symbol table.
#[derive(Debug, Clone)]
pub struct Scope {
    /// This scope's arena index.
    id: ScopeId,
    /// Dot-separated path from the root, e.g. `global.block1`.
    path: String,
    /// Last path segment.
    label: String,
    /// Enclosing scope (`None` for the root).
    parent: Option<ScopeId>,
    /// Child scopes in creation order.
    children: Vec<ScopeId>,
    /// Symbols defined in this scope, in declaration order.
    symbols: IndexMap<String, SymbolEntry>,
}

impl Scope {
    /// Create the root scope.
    pub(super) fn root() -> Self {
        Self {
            id: ScopeId::GLOBAL,
            path: GLOBAL_SCOPE.to_string(),
            label: GLOBAL_SCOPE.to_string(),
            parent: None,
            children: Vec::new(),
            symbols: IndexMap::new(),
        }
    }

    /// Create a child of this scope with path `<own path>.<label>`.
    ///
    /// The caller registers the returned scope in the arena and records
    /// `id` via [`Scope::add_child`].
    pub(super) fn create_child(&self, id: ScopeId, label: &str) -> Scope {
        Scope {
            id,
            path: format!("{}.{}", self.path, label),
            label: label.to_string(),
            parent: Some(self.id),
            children: Vec::new(),
            symbols: IndexMap::new(),
        }
    }

    /// Default label for the next unnamed child: `block{n}` where `n`
    /// counts this scope's children including the new one.
    pub fn next_block_label(&self) -> String {
        format!("{}{}", BLOCK_PREFIX, self.children.len() + 1)
    }

    pub(super) fn add_child(&mut self, id: ScopeId) {
        self.children.push(id);
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    pub fn is_global(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of symbols defined directly in this scope.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether `name` is defined directly in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Look up a symbol in this scope only.
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.symbols.get(name)
    }

    pub(super) fn get_mut(&mut self, name: &str) -> Option<&mut SymbolEntry> {
        self.symbols.get_mut(name)
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.symbols.values()
    }

    /// Define a symbol in this scope.
    ///
    /// Returns the already defined entry if the name is taken.
    pub(super) fn define(&mut self, mut symbol: SymbolEntry) -> Result<(), &SymbolEntry> {
        if self.symbols.contains_key(symbol.name()) {
            return Err(&self.symbols[symbol.name()]);
        }
        symbol.set_scope(self.id);
        self.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    /// Remove a symbol, keeping the declaration order of the rest.
    pub(super) fn remove(&mut self, name: &str) -> Option<SymbolEntry> {
        self.symbols.shift_remove(name)
    }
}

/// Iterator over a scope and its ancestors, innermost first.
pub struct Ancestors<'a> {
    scopes: &'a [Scope],
    next: Option<ScopeId>,
}

impl<'a> Ancestors<'a> {
    pub(super) fn new(scopes: &'a [Scope], start: ScopeId) -> Self {
        Self {
            scopes,
            next: Some(start),
        }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Scope;

    fn next(&mut self) -> Option<Self::Item> {
        let scope = self.scopes.get(self.next?.0)?;
        self.next = scope.parent;
        Some(scope)
    }
}

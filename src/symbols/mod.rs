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

//! Symbol table manager with hierarchical scope resolution.
//!
//! The table owns a tree of [`Scope`]s stored in an arena and a cursor to
//! the scope currently receiving declarations. Names resolve by walking
//! from a start scope towards the global scope, so the nearest enclosing
//! declaration wins.
//!
//! # Module Structure
//!
//! - `error` - Rejected operations ([`SymbolError`])
//! - `scope` - Scope nodes and the ancestor walk
//! - `stats` - Aggregate statistics and report views
//! - `symbol` - Symbol entries, values and partial updates

mod error;
mod scope;
mod stats;
mod symbol;

pub use error::SymbolError;
pub use scope::{Ancestors, Scope, ScopeId, BLOCK_PREFIX, GLOBAL_SCOPE};
pub use stats::{ScopeView, Statistics};
pub use symbol::{DataType, SymbolEntry, SymbolUpdate, Value};

use tracing::{debug, trace};

/// The symbol table for semantic analysis.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// All scopes ever created; index 0 is the global scope.
    scopes: Vec<Scope>,
    /// The scope receiving declarations.
    current: ScopeId,
}

impl SymbolTable {
    /// Create a new symbol table with a global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::root()],
            current: ScopeId::GLOBAL,
        }
    }

    // ========================================
    // Scope Queries
    // ========================================

    /// The global scope.
    pub fn root(&self) -> ScopeId {
        ScopeId::GLOBAL
    }

    /// The scope currently receiving declarations.
    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// The current scope node.
    pub fn current(&self) -> &Scope {
        &self.scopes[self.current.0]
    }

    /// Get a scope by id.
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Find a scope by its dot-separated path.
    pub fn scope_by_path(&self, path: &str) -> Option<ScopeId> {
        self.scopes.iter().find(|s| s.path() == path).map(Scope::id)
    }

    /// Number of scopes in the tree.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Check if we're in the global scope.
    pub fn is_global_scope(&self) -> bool {
        self.current == ScopeId::GLOBAL
    }

    /// Nesting depth of a scope (0 for the global scope).
    pub fn depth(&self, id: ScopeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// The scope itself, then its parent, up to the global scope.
    pub fn ancestors(&self, id: ScopeId) -> Ancestors<'_> {
        Ancestors::new(&self.scopes, id)
    }

    /// All scopes in pre-order (parents before children, siblings in
    /// creation order).
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.preorder().into_iter().map(move |id| &self.scopes[id.0])
    }

    fn preorder(&self) -> Vec<ScopeId> {
        let mut order = Vec::with_capacity(self.scopes.len());
        let mut stack = vec![ScopeId::GLOBAL];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.scopes[id.0].children().iter().rev().copied());
        }
        order
    }

    // ========================================
    // Symbol Operations
    // ========================================

    /// Declare a variable in the current scope.
    pub fn insert(
        &mut self,
        name: &str,
        declared_type: DataType,
        line: usize,
        value: Option<Value>,
    ) -> Result<(), SymbolError> {
        self.define(SymbolEntry::new(name, declared_type, line).with_optional_value(value))
    }

    /// Define a prepared entry in the current scope.
    ///
    /// Fails without touching the table if the name is already declared in
    /// the current scope. Declaring a name that exists in an enclosing scope
    /// shadows it and always succeeds.
    pub fn define(&mut self, entry: SymbolEntry) -> Result<(), SymbolError> {
        let scope = &mut self.scopes[self.current.0];
        let name = entry.name().to_string();
        if let Err(existing) = scope.define(entry) {
            let line = existing.line();
            debug!(symbol = %name, scope = %scope.path(), first_line = line, "duplicate declaration");
            return Err(SymbolError::Duplicate { name, line });
        }
        trace!(symbol = %name, scope = %scope.path(), "symbol defined");
        Ok(())
    }

    /// Resolve `name` from the current scope and mark it used.
    pub fn lookup(&mut self, name: &str) -> Option<&SymbolEntry> {
        self.lookup_from(name, self.current)
    }

    /// Resolve `name` starting at `scope` and mark the match used.
    ///
    /// This is the read-context query: every successful resolution counts
    /// as a use of the resolved entry.
    pub fn lookup_from(&mut self, name: &str, scope: ScopeId) -> Option<&SymbolEntry> {
        let owner = self.owner_of(name, scope)?;
        trace!(symbol = name, scope = %self.scopes[owner.0].path(), "lookup resolved");
        let entry = self.scopes[owner.0].get_mut(name)?;
        entry.mark_used();
        Some(&*entry)
    }

    /// Resolve `name` from the current scope without side effects.
    pub fn resolve(&self, name: &str) -> Option<&SymbolEntry> {
        self.resolve_from(name, self.current)
    }

    /// Resolve `name` starting at `scope` without side effects.
    pub fn resolve_from(&self, name: &str, scope: ScopeId) -> Option<&SymbolEntry> {
        self.ancestors(scope).find_map(|s| s.get(name))
    }

    /// Find the nearest scope, starting at `scope`, that declares `name`.
    fn owner_of(&self, name: &str, scope: ScopeId) -> Option<ScopeId> {
        self.ancestors(scope)
            .find(|s| s.contains(name))
            .map(Scope::id)
    }

    /// Update the entry `name` resolves to from the current scope.
    pub fn update(&mut self, name: &str, update: SymbolUpdate) -> Result<(), SymbolError> {
        self.update_from(name, self.current, update)
    }

    /// Update the entry `name` resolves to from `scope`.
    ///
    /// Resolution does not mark the entry used. Changing the value of a
    /// constant is rejected and leaves the entry untouched.
    pub fn update_from(
        &mut self,
        name: &str,
        scope: ScopeId,
        update: SymbolUpdate,
    ) -> Result<(), SymbolError> {
        let not_found = || SymbolError::NotFound(name.to_string());
        let owner = self.owner_of(name, scope).ok_or_else(not_found)?;
        let entry = self.scopes[owner.0].get_mut(name).ok_or_else(not_found)?;

        if entry.is_constant() && update.changes_value() {
            debug!(symbol = name, "rejected update of constant");
            return Err(SymbolError::ConstantMutation(name.to_string()));
        }

        entry.apply(update);
        trace!(symbol = name, "symbol updated");
        Ok(())
    }

    /// Remove the entry `name` resolves to from the current scope.
    pub fn delete(&mut self, name: &str) -> Result<SymbolEntry, SymbolError> {
        self.delete_from(name, self.current)
    }

    /// Remove `name` from the first scope, starting at `scope`, that
    /// declares it. The scope itself stays even if it becomes empty.
    pub fn delete_from(&mut self, name: &str, scope: ScopeId) -> Result<SymbolEntry, SymbolError> {
        let owner = self
            .owner_of(name, scope)
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))?;
        let removed = self.scopes[owner.0]
            .remove(name)
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))?;
        debug!(symbol = name, scope = %self.scopes[owner.0].path(), "symbol deleted");
        Ok(removed)
    }

    /// Symbols declared directly in `scope`, in declaration order.
    pub fn symbols_in(&self, scope: ScopeId) -> Vec<&SymbolEntry> {
        self.scope(scope)
            .map(|s| s.symbols().collect())
            .unwrap_or_default()
    }

    /// Every symbol of the table, scopes in pre-order.
    pub fn all_symbols(&self) -> Vec<&SymbolEntry> {
        self.scopes().flat_map(Scope::symbols).collect()
    }

    // ========================================
    // Scope Transitions
    // ========================================

    /// Enter a new, automatically numbered child of the current scope.
    pub fn enter_scope(&mut self) -> ScopeId {
        let label = self.free_block_label();
        self.push_child(&label)
    }

    /// Enter a labelled child of the current scope.
    ///
    /// If the current scope already has a child with this label, that
    /// child is re-entered so scope paths stay unique.
    pub fn enter_named_scope(&mut self, label: &str) -> Result<ScopeId, SymbolError> {
        if label.is_empty() || label.contains('.') {
            return Err(SymbolError::InvalidScopeLabel(label.to_string()));
        }
        if let Some(existing) = self.child_labelled(self.current, label) {
            self.current = existing;
            debug!(scope = %self.current().path(), "scope re-entered");
            return Ok(existing);
        }
        Ok(self.push_child(label))
    }

    /// Leave the current scope and return the new current scope.
    ///
    /// Leaving the global scope is an error and does not move the cursor.
    pub fn exit_scope(&mut self) -> Result<ScopeId, SymbolError> {
        let parent = self
            .current()
            .parent()
            .ok_or(SymbolError::UnbalancedExit)?;
        debug!(from = %self.current().path(), "scope exited");
        self.current = parent;
        Ok(parent)
    }

    fn push_child(&mut self, label: &str) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        let child = self.scopes[self.current.0].create_child(id, label);
        self.scopes[self.current.0].add_child(id);
        debug!(scope = %child.path(), "scope entered");
        self.scopes.push(child);
        self.current = id;
        id
    }

    fn child_labelled(&self, parent: ScopeId, label: &str) -> Option<ScopeId> {
        self.scopes[parent.0]
            .children()
            .iter()
            .copied()
            .find(|child| self.scopes[child.0].label() == label)
    }

    /// `block{n}` for the current scope, skipping labels a named child
    /// already took.
    fn free_block_label(&self) -> String {
        let current = self.current();
        let mut n = current.children().len() + 1;
        let mut label = current.next_block_label();
        while self.child_labelled(self.current, &label).is_some() {
            n += 1;
            label = format!("{}{}", BLOCK_PREFIX, n);
        }
        label
    }

    // ========================================
    // Reporting
    // ========================================

    /// Count scopes and symbols over the whole tree.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics::default();
        for scope in self.scopes() {
            stats.record_scope(scope);
        }
        stats
    }

    /// One view per scope in pre-order, for presentation.
    pub fn snapshot(&self) -> Vec<ScopeView<'_>> {
        self.scopes()
            .map(|scope| ScopeView {
                path: scope.path(),
                depth: self.depth(scope.id()),
                symbols: scope.symbols().collect(),
            })
            .collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

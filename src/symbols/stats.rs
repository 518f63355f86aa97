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

//! Aggregate statistics and read-only views of the scope tree.

use serde::Serialize;

use super::scope::Scope;
use super::symbol::SymbolEntry;

/// Counts over the whole scope tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of scopes, including the global scope.
    pub total_scopes: usize,
    /// Number of symbols across all scopes.
    pub total_symbols: usize,
    /// Symbols holding a value.
    pub initialized: usize,
    /// Symbols read at least once.
    pub used: usize,
    /// Symbols never read (`total_symbols - used`).
    pub unused: usize,
}

impl Statistics {
    /// Account for one scope and its symbols.
    pub(super) fn record_scope(&mut self, scope: &Scope) {
        self.total_scopes += 1;
        for symbol in scope.symbols() {
            self.total_symbols += 1;
            if symbol.is_initialized() {
                self.initialized += 1;
            }
            if symbol.is_used() {
                self.used += 1;
            } else {
                self.unused += 1;
            }
        }
    }
}

/// One scope of the table as presented to reports.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeView<'a> {
    /// Dot-separated scope path.
    pub path: &'a str,
    /// Nesting depth (0 for the global scope).
    pub depth: usize,
    /// Symbols in declaration order.
    pub symbols: Vec<&'a SymbolEntry>,
}

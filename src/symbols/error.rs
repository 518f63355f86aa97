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

//! Failures reported by symbol table operations.

use thiserror::Error;

/// Why a symbol table operation was rejected.
///
/// A rejected operation never mutates the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The name is already declared in the current scope.
    #[error("'{name}' is already declared in this scope (line {line})")]
    Duplicate {
        /// The rejected name.
        name: String,
        /// Line of the declaration that was kept.
        line: usize,
    },

    /// No scope in the searched chain declares the name.
    #[error("'{0}' is not declared")]
    NotFound(String),

    /// The update tried to change the value of a constant.
    #[error("cannot change the value of constant '{0}'")]
    ConstantMutation(String),

    /// `exit_scope` was called while at the global scope.
    #[error("cannot exit the global scope")]
    UnbalancedExit,

    /// A scope label was empty or contained a path separator.
    #[error("invalid scope label '{0}'")]
    InvalidScopeLabel(String),
}

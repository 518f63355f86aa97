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

//! Scopec Compiler Library
//!
//! This library provides a small compiler front-end whose centre is a
//! symbol table with hierarchical, block-scoped name resolution.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Syntax analysis that populates the symbol table
//! - [`symbols`] - The symbol table manager and scope tree
//! - [`output`] - Text and JSON reports
//! - [`logging`] - Diagnostic logging setup
//!
//! # Example
//!
//! ```
//! use scopec::{lexer, parser};
//!
//! let tokens = lexer::tokenize("int a = 5;\n{ int a = 100; }").unwrap();
//! let analysis = parser::analyze(&tokens).unwrap();
//!
//! let stats = analysis.table.statistics();
//! assert_eq!(stats.total_scopes, 2);
//! assert_eq!(stats.total_symbols, 2);
//! ```

pub mod error;
pub mod lexer;
pub mod logging;
pub mod output;
pub mod parser;
pub mod symbols;

// Re-export commonly used types
pub use error::{
    format_error, format_warning, CompileError, CompileWarning, ErrorCode, Errors, Failure,
    Result, SourceLocation, Span, WarningCode,
};
pub use lexer::Token;
pub use parser::Analysis;
pub use symbols::{DataType, ScopeId, SymbolEntry, SymbolTable, SymbolUpdate, Value};

/// The version of the scopec compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "Scopec";

/// Everything a successful front-end run produces.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// The token stream.
    pub tokens: Vec<(Token, Span)>,
    /// The populated symbol table and collected semantic errors.
    pub analysis: Analysis,
    /// Unused-variable warnings, in report order.
    pub warnings: Vec<CompileWarning>,
}

impl Compilation {
    /// Whether any semantic error was recorded.
    pub fn has_errors(&self) -> bool {
        self.analysis.errors.has_errors()
    }
}

/// Compile source code into a populated symbol table.
///
/// Lexical, syntax and structural errors stop compilation and are returned
/// as a [`Failure`], together with any semantic errors recorded before the
/// stop. Otherwise semantic errors do not stop compilation; they are
/// collected in [`Analysis::errors`].
///
/// # Example
///
/// ```
/// let compilation = scopec::compile("int x = 10;\nint x = 20;").unwrap();
/// assert_eq!(
///     compilation.analysis.errors.lines(),
///     vec![(2, "Duplicate declaration of variable 'x'".to_string())]
/// );
///
/// let failure = scopec::compile("y = 1;\n}").unwrap_err();
/// assert_eq!(failure.code(), scopec::ErrorCode::UnbalancedScopeExit);
/// assert_eq!(failure.errors.len(), 1);
/// ```
pub fn compile(source: &str) -> std::result::Result<Compilation, Failure> {
    // Tokenize
    let tokens = lexer::tokenize(source)?;

    // Parse and populate the table
    let analysis = parser::analyze(&tokens)?;

    // Report symbols that were never read
    let warnings = unused_warnings(&analysis.table);

    Ok(Compilation {
        tokens,
        analysis,
        warnings,
    })
}

/// One warning per symbol that was declared but never read.
pub fn unused_warnings(table: &SymbolTable) -> Vec<CompileWarning> {
    table
        .all_symbols()
        .into_iter()
        .filter(|symbol| !symbol.is_used())
        .map(|symbol| {
            let span = symbol
                .span()
                .unwrap_or_else(|| Span::new(0, 0, symbol.line()));
            CompileWarning::new(
                WarningCode::UnusedVariable,
                format!("Variable '{}' declared but never used", symbol.name()),
                span,
            )
        })
        .collect()
}

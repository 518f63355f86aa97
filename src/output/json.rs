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

//! JSON report.
//!
//! The document has four keys: `scopes` (pre-order, each with its
//! symbols in declaration order), `statistics`, `errors` and `warnings`.

use serde::Serialize;

use super::ReportOptions;
use crate::symbols::{ScopeView, Statistics};
use crate::Compilation;

/// Statistics as reported, including the token and error counts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportStatistics {
    pub tokens: usize,
    #[serde(flatten)]
    pub table: Statistics,
    pub errors: usize,
}

/// A diagnostic as reported.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic<'a> {
    pub code: &'static str,
    pub line: usize,
    pub message: &'a str,
}

/// The complete JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub scopes: Vec<ScopeView<'a>>,
    pub statistics: ReportStatistics,
    pub errors: Vec<Diagnostic<'a>>,
    pub warnings: Vec<Diagnostic<'a>>,
}

impl<'a> Report<'a> {
    /// Collect the report for a compilation.
    pub fn new(compilation: &'a Compilation, options: ReportOptions) -> Self {
        let analysis = &compilation.analysis;

        let mut scopes = analysis.table.snapshot();
        if options.hide_unused {
            for view in &mut scopes {
                view.symbols.retain(|s| s.is_used());
            }
        }

        Self {
            scopes,
            statistics: ReportStatistics {
                tokens: analysis.token_count,
                table: analysis.table.statistics(),
                errors: analysis.errors.len(),
            },
            errors: analysis
                .errors
                .iter()
                .map(|e| Diagnostic {
                    code: e.code_str(),
                    line: e.line(),
                    message: &e.message,
                })
                .collect(),
            warnings: compilation
                .warnings
                .iter()
                .map(|w| Diagnostic {
                    code: w.code.code(),
                    line: w.span.line,
                    message: &w.message,
                })
                .collect(),
        }
    }
}

/// Render a compilation as pretty-printed JSON.
pub fn render_json(compilation: &Compilation, options: ReportOptions) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(compilation, options))
}

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

//! Output module for the scopec compiler.
//!
//! This module renders the result of a compilation in various formats:
//! - Text (symbol table, statistics and warnings for humans)
//! - JSON (the same data for tools)

pub mod json;
mod text;

pub use json::{render_json, Report};
pub use text::{render_text, render_tokens, truncate_value};

use crate::Compilation;

/// The report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected 'text' or 'json')", other)),
        }
    }
}

/// What to include in a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Leave symbols that were never read out of the symbol listing.
    pub hide_unused: bool,
}

/// Render a compilation in the requested format.
pub fn render(
    compilation: &Compilation,
    format: OutputFormat,
    options: ReportOptions,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(compilation, options)),
        OutputFormat::Json => render_json(compilation, options),
    }
}

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

//! Plain text report.

use std::fmt::Write;

use super::ReportOptions;
use crate::error::Span;
use crate::lexer::Token;
use crate::symbols::SymbolEntry;
use crate::Compilation;

/// Width of the rules framing each section.
const RULE_WIDTH: usize = 80;

/// Values longer than this are shortened in the table.
const MAX_VALUE_WIDTH: usize = 15;

fn rule(out: &mut String, c: char) {
    out.extend(std::iter::repeat(c).take(RULE_WIDTH));
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    rule(out, '=');
    out.push_str(title);
    out.push('\n');
    rule(out, '=');
}

/// Shorten a rendered value to at most 15 characters.
pub fn truncate_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_WIDTH {
        let head: String = value.chars().take(MAX_VALUE_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

fn push_row(out: &mut String, cells: [&str; 6]) {
    let line = format!(
        "{:<15} {:<10} {:<6} {:<6} {:<6} {}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_symbol(out: &mut String, symbol: &SymbolEntry) {
    let value = symbol
        .value()
        .map(|v| truncate_value(&v.to_string()))
        .unwrap_or_else(|| "-".to_string());
    push_row(
        out,
        [
            symbol.name(),
            symbol.declared_type().name(),
            &symbol.line().to_string(),
            if symbol.is_initialized() { "true" } else { "false" },
            if symbol.is_used() { "true" } else { "false" },
            &value,
        ],
    );
}

fn push_symbol_table(out: &mut String, compilation: &Compilation, options: ReportOptions) {
    heading(out, "SYMBOL TABLE");

    let mut any = false;
    for view in compilation.analysis.table.snapshot() {
        let symbols: Vec<_> = view
            .symbols
            .iter()
            .filter(|s| !options.hide_unused || s.is_used())
            .collect();
        if symbols.is_empty() {
            continue;
        }
        any = true;

        let _ = writeln!(out, "\nScope: {}", view.path);
        rule(out, '-');
        push_row(out, ["Name", "Type", "Line", "Init", "Used", "Value"]);
        rule(out, '-');
        for symbol in symbols {
            push_symbol(out, symbol);
        }
    }

    if !any {
        out.push_str("(empty)\n");
    }
    rule(out, '=');
}

fn push_statistics(out: &mut String, compilation: &Compilation) {
    let stats = compilation.analysis.table.statistics();
    out.push('\n');
    heading(out, "COMPILATION STATISTICS");
    let rows = [
        ("Total Tokens:", compilation.analysis.token_count),
        ("Total Symbols:", stats.total_symbols),
        ("Total Scopes:", stats.total_scopes),
        ("Initialized Vars:", stats.initialized),
        ("Used Vars:", stats.used),
        ("Unused Vars:", stats.unused),
        ("Compilation Errors:", compilation.analysis.errors.len()),
    ];
    for (label, count) in rows {
        let _ = writeln!(out, "{:<21}{}", label, count);
    }
    rule(out, '=');
}

fn push_warnings(out: &mut String, compilation: &Compilation) {
    if compilation.warnings.is_empty() {
        return;
    }
    out.push_str("\nWARNINGS:\n");
    for warning in &compilation.warnings {
        let _ = writeln!(out, "  - Line {}: {}", warning.span.line, warning.message);
    }
}

/// Render the symbol table, statistics and warnings.
pub fn render_text(compilation: &Compilation, options: ReportOptions) -> String {
    let mut out = String::new();
    push_symbol_table(&mut out, compilation, options);
    push_statistics(&mut out, compilation);
    push_warnings(&mut out, compilation);
    out
}

/// Render a token dump, one token per line.
pub fn render_tokens(tokens: &[(Token, Span)]) -> String {
    let mut out = String::new();
    heading(&mut out, "TOKENS");
    for (token, span) in tokens {
        let _ = writeln!(
            out,
            "{:>4}  {:<11} {}",
            span.line,
            token.category().name(),
            token.lexeme()
        );
    }
    rule(&mut out, '=');
    out
}

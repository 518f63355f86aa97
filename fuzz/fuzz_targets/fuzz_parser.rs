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

//! Fuzz target for the parser and the symbol table it fills.
//!
//! Whatever the token stream, analysis must end with the cursor back at
//! the global scope or with a fatal error.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(tokens) = scopec::lexer::tokenize(source) {
            if let Ok(analysis) = scopec::parser::analyze(&tokens) {
                assert!(analysis.table.is_global_scope());
                let stats = analysis.table.statistics();
                assert_eq!(stats.used + stats.unused, stats.total_symbols);
            }
        }
    }
});

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

//! Fuzz target driving the symbol table directly.
//!
//! Random operation sequences check that the cursor and the statistics
//! stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scopec::{DataType, SymbolTable, SymbolUpdate, Value};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { name: u8, value: Option<i64> },
    Lookup { name: u8 },
    Assign { name: u8, value: i64 },
    Delete { name: u8 },
    Enter,
    EnterNamed { label: u8 },
    Exit,
}

/// A small name pool so operations collide often.
fn name(n: u8) -> String {
    format!("v{}", n % 8)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut table = SymbolTable::new();
    let mut depth = 0usize;

    for op in ops {
        match op {
            Op::Insert { name: n, value } => {
                let _ = table.insert(&name(n), DataType::Int, 1, value.map(Value::Int));
            }
            Op::Lookup { name: n } => {
                if let Some(entry) = table.lookup(&name(n)) {
                    assert!(entry.is_used());
                }
            }
            Op::Assign { name: n, value } => {
                let existed = table.resolve(&name(n)).is_some();
                let result = table.update(&name(n), SymbolUpdate::assign(Value::Int(value)));
                assert_eq!(result.is_ok(), existed);
            }
            Op::Delete { name: n } => {
                let _ = table.delete(&name(n));
            }
            Op::Enter => {
                table.enter_scope();
                depth += 1;
            }
            Op::EnterNamed { label } => {
                if table.enter_named_scope(&format!("s{}", label % 4)).is_ok() {
                    depth += 1;
                }
            }
            Op::Exit => {
                let result = table.exit_scope();
                assert_eq!(result.is_ok(), depth > 0);
                depth = depth.saturating_sub(1);
            }
        }

        assert_eq!(table.depth(table.current_scope()), depth);
        let stats = table.statistics();
        assert_eq!(stats.used + stats.unused, stats.total_symbols);
        assert_eq!(stats.total_scopes, table.scope_count());
    }
});

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

//! Property-based tests for the scopec compiler.
//!
//! These tests verify important invariants and properties that should
//! hold for all inputs, using proptest for random input generation.

use proptest::prelude::*;
use scopec::{compile, lexer, DataType, SymbolTable, SymbolUpdate, Value};

/// Identifiers that can never collide with a keyword.
fn name_strategy() -> impl Strategy<Value = String> {
    "v_[a-z0-9]{0,6}"
}

fn type_strategy() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Int),
        Just(DataType::Float),
        Just(DataType::String),
        Just(DataType::Bool),
    ]
}

// ============================================================================
// Lexer Property Tests
// ============================================================================

proptest! {
    /// Property: All tokens have non-empty spans inside the source.
    #[test]
    fn prop_lexer_spans_in_bounds(source in "[a-zA-Z0-9_ +\\-*/=;{}()<>!\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            for (token, span) in &tokens {
                prop_assert!(span.start < span.end, "Empty span for {:?}", token);
                prop_assert!(
                    span.end <= source.len(),
                    "Token {:?} span end {} exceeds source length {}",
                    token, span.end, source.len()
                );
            }
        }
    }

    /// Property: Token spans are ordered and never overlap.
    #[test]
    fn prop_lexer_spans_non_overlapping(source in "[a-z0-9_ ;=+\\n]{0,150}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(
                    pair[0].1.end <= pair[1].1.start,
                    "Overlapping spans: {:?} and {:?}", pair[0], pair[1]
                );
            }
        }
    }

    /// Property: Line numbers never decrease and match the newlines before each token.
    #[test]
    fn prop_lexer_lines_match_source(source in "[a-z0-9 ;=\\n]{0,150}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let mut last = 1;
            for (_, span) in &tokens {
                let expected = 1 + source[..span.start].matches('\n').count();
                prop_assert_eq!(span.line, expected);
                prop_assert!(span.line >= last);
                last = span.line;
            }
        }
    }

    /// Property: The lexer never panics on arbitrary input.
    #[test]
    fn prop_lexer_no_panic(source in "\\PC{0,200}") {
        let _ = lexer::tokenize(&source);
    }

    /// Property: The whole front-end never panics on arbitrary input.
    #[test]
    fn prop_compile_no_panic(source in "[a-z0-9 ;=+{}()\\n]{0,200}") {
        let _ = compile(&source);
    }
}

// ============================================================================
// Symbol Table Property Tests
// ============================================================================

proptest! {
    /// Property: Entering and then exiting any number of scopes returns to global.
    #[test]
    fn prop_enter_exit_restores_cursor(depth in 1usize..20) {
        let mut table = SymbolTable::new();
        let mut entered = Vec::new();
        for _ in 0..depth {
            entered.push(table.current_scope());
            table.enter_scope();
        }
        while let Some(expected) = entered.pop() {
            prop_assert_eq!(table.exit_scope().unwrap(), expected);
        }
        prop_assert!(table.is_global_scope());
        prop_assert!(table.exit_scope().is_err());
        prop_assert_eq!(table.scope_count(), depth + 1);
    }

    /// Property: A second declaration in the same scope is always rejected
    /// and leaves the first one untouched.
    #[test]
    fn prop_duplicate_rejected(name in name_strategy(), ty in type_strategy(), other in type_strategy()) {
        let mut table = SymbolTable::new();
        table.insert(&name, ty, 1, None).unwrap();
        prop_assert!(table.insert(&name, other, 2, None).is_err());

        let entry = table.resolve(&name).unwrap();
        prop_assert_eq!(entry.declared_type(), ty);
        prop_assert_eq!(entry.line(), 1);
        prop_assert_eq!(table.statistics().total_symbols, 1);
    }

    /// Property: An inner declaration shadows the outer one until its scope closes.
    #[test]
    fn prop_shadowing(name in name_strategy(), outer in -1000i64..1000, inner in -1000i64..1000) {
        let mut table = SymbolTable::new();
        table.insert(&name, DataType::Int, 1, Some(Value::Int(outer))).unwrap();
        table.enter_scope();
        table.insert(&name, DataType::Int, 2, Some(Value::Int(inner))).unwrap();
        prop_assert_eq!(table.resolve(&name).unwrap().value(), Some(&Value::Int(inner)));

        table.exit_scope().unwrap();
        prop_assert_eq!(table.resolve(&name).unwrap().value(), Some(&Value::Int(outer)));
    }

    /// Property: used + unused always equals the number of symbols.
    #[test]
    fn prop_statistics_balance(
        names in prop::collection::hash_set(name_strategy(), 0..20),
        read_mask in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mut table = SymbolTable::new();
        for (i, name) in names.iter().enumerate() {
            if i % 3 == 0 {
                table.enter_scope();
            }
            table.insert(name, DataType::Int, i + 1, None).unwrap();
            if read_mask[i] {
                table.lookup(name);
            }
        }

        let stats = table.statistics();
        prop_assert_eq!(stats.total_symbols, names.len());
        prop_assert_eq!(stats.used + stats.unused, stats.total_symbols);
        prop_assert_eq!(
            stats.used,
            read_mask.iter().take(names.len()).filter(|r| **r).count()
        );
        prop_assert_eq!(stats.initialized, 0);
    }

    /// Property: Updating an undeclared name fails and never creates an entry.
    #[test]
    fn prop_update_missing_never_creates(name in name_strategy(), value in any::<i64>()) {
        let mut table = SymbolTable::new();
        table.enter_scope();
        prop_assert!(table.update(&name, SymbolUpdate::assign(Value::Int(value))).is_err());
        prop_assert!(table.resolve(&name).is_none());
        prop_assert_eq!(table.statistics().total_symbols, 0);
    }

    /// Property: Deleting the inner declaration uncovers the outer one.
    #[test]
    fn prop_delete_uncovers_outer(name in name_strategy()) {
        let mut table = SymbolTable::new();
        table.insert(&name, DataType::Bool, 1, Some(Value::Bool(true))).unwrap();
        table.enter_scope();
        table.insert(&name, DataType::Bool, 2, Some(Value::Bool(false))).unwrap();

        let removed = table.delete(&name).unwrap();
        prop_assert_eq!(removed.line(), 2);
        prop_assert_eq!(table.resolve(&name).unwrap().line(), 1);

        table.delete(&name).unwrap();
        prop_assert!(table.resolve(&name).is_none());
        prop_assert!(table.delete(&name).is_err());
        prop_assert_eq!(table.scope_count(), 2);
    }
}

// ============================================================================
// Front-end Property Tests
// ============================================================================

proptest! {
    /// Property: Every block in a program becomes exactly one scope.
    #[test]
    fn prop_blocks_become_scopes(blocks in 0usize..15) {
        let source = "{ }\n".repeat(blocks);
        let compilation = compile(&source).unwrap();
        prop_assert_eq!(compilation.analysis.table.statistics().total_scopes, blocks + 1);
    }

    /// Property: Each declared-but-unread variable produces exactly one warning.
    #[test]
    fn prop_unused_warnings_match_statistics(names in prop::collection::btree_set(name_strategy(), 1..10)) {
        let source: String = names.iter().map(|n| format!("int {} = 1;\n", n)).collect();
        let compilation = compile(&source).unwrap();
        let stats = compilation.analysis.table.statistics();
        prop_assert_eq!(compilation.warnings.len(), stats.unused);
        prop_assert_eq!(stats.unused, names.len());
    }
}

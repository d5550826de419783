// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use stack_codes::{Codeword, CodewordTable, NamedTable};

/// The stacking conditions written out index by index, without the crate's helpers.
///
/// Returns `(balance_holds, capacity_holds_for_every_i)`.
pub fn conditions(code: &[u64], d: usize, h: usize) -> (bool, bool) {
    let signed = |v: u64| v as i64;
    let tail = |from: usize| -> i64 { (from..=d).map(|k| signed(code[k])).sum() };

    let balance = signed(code[0]) == (d + h) as i64 - 2 - tail(1);
    let capacity = (1..d).all(|i| signed(code[i]) <= (d + h) as i64 - 1 - i as i64 - tail(i + 1));
    (balance, capacity)
}

pub fn active_table() -> CodewordTable {
    CodewordTable::named(NamedTable::N5)
}

pub fn codewords(rows: &[&[u64]]) -> Vec<Codeword> {
    rows.iter().map(|row| Codeword::from(row.to_vec())).collect()
}

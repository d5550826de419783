// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stacking the built-in tables.

mod common;

use common::{active_table, codewords, conditions};
use stack_codes::stack::{check, derive, Rejection, Verdict};
use stack_codes::{stack, Codeword, CodewordTable, NamedTable, StackError, StackParams};

#[test]
fn test_active_table_rows_have_uniform_length() {
    let table = active_table();
    let n = table.width().unwrap();
    assert_eq!(n, 5);
    for code in &table {
        assert_eq!(code.len(), n);
    }
}

#[test]
fn test_active_configuration() {
    let table = active_table();
    let valid = stack(table.as_slice(), StackParams::new(2, 4)).unwrap();
    assert!(valid.len() > 0 && valid.len() < table.len());
    assert_eq!(valid.len(), 14);
}

#[test]
fn test_documented_scenarios() {
    let table = active_table();
    let valid = stack(table.as_slice(), StackParams::new(2, 4)).unwrap();
    let derived = derive(&valid, 2);

    let find = |values: [u64; 5]| {
        let code = Codeword::from(values);
        let position = valid.iter().position(|v| *v == code).expect("codeword stacks");
        &derived[position]
    };

    let fan = find([4, 0, 0, 0, 0]);
    assert_eq!(fan.reversed, Codeword::from([0, 0, 0, 0, 4]));
    assert_eq!(fan.short_code, Codeword::from([0, 0]));
    assert_eq!(find([3, 1, 0, 0, 0]).short_code, Codeword::from([1, 0]));
    assert_eq!(find([2, 2, 0, 0, 0]).short_code, Codeword::from([2, 0]));
}

#[test]
fn test_output_is_ordered_subsequence() {
    let table = active_table();
    for d in 0..=4 {
        for h in 0..=6 {
            let valid = stack(table.as_slice(), StackParams::new(d, h)).unwrap();
            let mut rows = table.iter();
            for code in &valid {
                assert!(
                    rows.any(|row| row == code),
                    "{} out of order for d={} h={}",
                    code,
                    d,
                    h
                );
            }
        }
    }
}

#[test]
fn test_accepted_and_rejected_partition_the_table() {
    let table = active_table();
    for d in 0..=4 {
        for h in 0..=6 {
            let valid = stack(table.as_slice(), StackParams::new(d, h)).unwrap();
            for code in &table {
                let (balance, capacity) = conditions(code, d, h);
                assert_eq!(
                    valid.contains(code),
                    balance && capacity,
                    "{} with d={} h={}",
                    code,
                    d,
                    h
                );
            }
        }
    }
}

#[test]
fn test_d_one_depends_on_balance_only() {
    let table = active_table();
    for code in &table {
        let (balance, _) = conditions(code, 1, 4);
        let verdict = check(code, StackParams::new(1, 4)).unwrap();
        assert_eq!(verdict.is_accepted(), balance);
        assert_ne!(verdict, Verdict::Rejected(Rejection::Capacity { index: 1 }));
    }
}

#[test]
fn test_short_code_equals_direct_slice() {
    let table = active_table();
    for d in 0..=4 {
        let valid = stack(table.as_slice(), StackParams::new(d, 6 - d)).unwrap();
        for (code, derivation) in valid.iter().zip(derive(&valid, d)) {
            assert_eq!(derivation.short_code.as_slice(), &code[1..d + 1]);
            assert_eq!(derivation.reversed.reversed(), *code);
        }
    }
}

#[test]
fn test_alternate_table() {
    let table = CodewordTable::named(NamedTable::N4);
    let valid = stack(table.as_slice(), StackParams::new(3, 2)).unwrap();
    // d = N - 1, h = 2 accepts every triangulation.
    assert_eq!(valid.len(), 14);
    assert!(stack(table.as_slice(), StackParams::new(4, 2)).is_err());
}

#[test]
fn test_dimension_too_large_for_table() {
    let table = active_table();
    assert_eq!(
        stack(table.as_slice(), StackParams::new(5, 4)),
        Err(StackError::CodewordTooShort {
            index: 0,
            len: 5,
            required: 6
        })
    );
}

#[test]
fn test_malformed_row_fails_whole_run() {
    let rows = codewords(&[&[4, 0, 0, 0, 0], &[3, 1, 0, 0, 0], &[2, 2]]);
    assert_eq!(
        stack(&rows, StackParams::new(2, 4)),
        Err(StackError::CodewordTooShort {
            index: 2,
            len: 2,
            required: 3
        })
    );
}

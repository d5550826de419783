// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table handling and stacking.

use thiserror::Error;

/// Errors raised when a codeword table does not fit the requested parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// The stacking predicate reads indices `0..=d`, so every codeword needs `d + 1` entries.
    #[error("codeword {index} has length {len}, but stacking needs at least {required} entries")]
    CodewordTooShort {
        index: usize,
        len: usize,
        required: usize,
    },

    /// A table row differs in length from the first row.
    #[error(
        "codeword {index} has length {found}, expected {expected} (length of the first codeword)"
    )]
    NonUniformTable {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The table has no first row to take the width from.
    #[error("codeword table is empty")]
    EmptyTable,
}

/// A convenience `Result` alias using [`StackError`].
pub type Result<T> = std::result::Result<T, StackError>;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed codeword tables.
//!
//! `TABLE_N5` is the active configuration (42 codewords of length 5, the
//! triangulations of a heptagon). `TABLE_N4` holds the 14 codewords of
//! length 4. Both are listed in Gray-code order, the order produced by
//! [`generate`](super::generate()).

use super::Codeword;
use crate::error::{Result, StackError};

/// Codewords of length 5, in Gray-code order.
pub const TABLE_N5: [[u64; 5]; 42] = [
    [4, 0, 0, 0, 0],
    [3, 1, 0, 0, 0],
    [2, 2, 0, 0, 0],
    [1, 3, 0, 0, 0],
    [0, 4, 0, 0, 0],
    [0, 3, 1, 0, 0],
    [1, 2, 1, 0, 0],
    [2, 1, 1, 0, 0],
    [3, 0, 1, 0, 0],
    [2, 0, 2, 0, 0],
    [1, 1, 2, 0, 0],
    [0, 2, 2, 0, 0],
    [0, 1, 3, 0, 0],
    [1, 0, 3, 0, 0],
    [1, 0, 2, 1, 0],
    [0, 1, 2, 1, 0],
    [0, 2, 1, 1, 0],
    [1, 1, 1, 1, 0],
    [2, 0, 1, 1, 0],
    [3, 0, 0, 1, 0],
    [2, 1, 0, 1, 0],
    [1, 2, 0, 1, 0],
    [0, 3, 0, 1, 0],
    [0, 2, 0, 2, 0],
    [1, 1, 0, 2, 0],
    [2, 0, 0, 2, 0],
    [1, 0, 1, 2, 0],
    [0, 1, 1, 2, 0],
    [0, 1, 1, 1, 1],
    [1, 0, 1, 1, 1],
    [2, 0, 0, 1, 1],
    [1, 1, 0, 1, 1],
    [0, 2, 0, 1, 1],
    [0, 3, 0, 0, 1],
    [1, 2, 0, 0, 1],
    [2, 1, 0, 0, 1],
    [3, 0, 0, 0, 1],
    [2, 0, 1, 0, 1],
    [1, 1, 1, 0, 1],
    [0, 2, 1, 0, 1],
    [0, 1, 2, 0, 1],
    [1, 0, 2, 0, 1],
];

/// Codewords of length 4, in Gray-code order.
pub const TABLE_N4: [[u64; 4]; 14] = [
    [3, 0, 0, 0],
    [2, 1, 0, 0],
    [1, 2, 0, 0],
    [0, 3, 0, 0],
    [0, 2, 1, 0],
    [1, 1, 1, 0],
    [2, 0, 1, 0],
    [1, 0, 2, 0],
    [0, 1, 2, 0],
    [0, 1, 1, 1],
    [1, 0, 1, 1],
    [2, 0, 0, 1],
    [1, 1, 0, 1],
    [0, 2, 0, 1],
];

/// The built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedTable {
    #[default]
    N5,
    N4,
}

/// An ordered collection of codewords.
///
/// Rows are not checked on construction. Use [`CodewordTable::check_uniform`]
/// when the rows come from somewhere other than the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodewordTable {
    rows: Vec<Codeword>,
}

impl CodewordTable {
    pub fn new(rows: Vec<Codeword>) -> Self {
        Self { rows }
    }

    pub fn named(table: NamedTable) -> Self {
        match table {
            NamedTable::N5 => TABLE_N5.iter().copied().map(Codeword::from).collect(),
            NamedTable::N4 => TABLE_N4.iter().copied().map(Codeword::from).collect(),
        }
    }

    /// Length of the first codeword, or `None` for an empty table.
    pub fn width(&self) -> Option<usize> {
        self.rows.first().map(|code| code.len())
    }

    /// Check that every row has the width of the first row.
    pub fn check_uniform(&self) -> Result<usize> {
        let expected = self.width().ok_or(StackError::EmptyTable)?;
        match self.rows.iter().position(|code| code.len() != expected) {
            Some(index) => Err(StackError::NonUniformTable {
                index,
                expected,
                found: self.rows[index].len(),
            }),
            None => Ok(expected),
        }
    }

    /// Every row read back-to-front, in table order.
    pub fn reversed(&self) -> Vec<Codeword> {
        self.rows.iter().map(Codeword::reversed).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Codeword> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[Codeword] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Codeword> {
        self.rows
    }
}

impl FromIterator<Codeword> for CodewordTable {
    fn from_iter<I: IntoIterator<Item = Codeword>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CodewordTable {
    type Item = &'a Codeword;
    type IntoIter = std::slice::Iter<'a, Codeword>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Codewords and the tables they come in.
//!
//! A codeword of length `N` is a composition of `N - 1` into `N` non-negative
//! parts. Each one encodes a triangulation of an `(N+2)`-gon: entry `w[i]` is
//! the number of diagonals leaving vertex `i` towards higher-numbered vertices.
//!
//! - [`Codeword`]: one vector, with reversal and diagonal extraction
//! - [`CodewordTable`]: an ordered collection, width taken from its first row
//! - [`generate`]: the Gray-code walk that lists every codeword of a length

pub mod generate;
pub mod table;

pub use generate::generate;
pub use table::{CodewordTable, NamedTable, TABLE_N4, TABLE_N5};

use std::fmt;
use std::ops::Deref;

use crate::stack::{check, StackParams, Verdict};

/// An ordered sequence of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Codeword(Vec<u64>);

impl Codeword {
    pub fn new(values: Vec<u64>) -> Self {
        Codeword(values)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// The entries read back-to-front.
    pub fn reversed(&self) -> Codeword {
        Codeword(self.0.iter().rev().copied().collect())
    }

    /// Sum of the entries in the half-open range `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds the codeword length.
    pub fn range_sum(&self, start: usize, end: usize) -> u64 {
        self.0[start..end].iter().sum()
    }

    /// Zerling's Lemma 1: the codeword describes a triangulation of an `(N+2)`-gon.
    ///
    /// This is the stacking predicate at `d = N - 1`, `h = 2`.
    pub fn is_triangulation(&self) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let params = StackParams::new(self.len() - 1, 2);
        matches!(check(self, params), Ok(Verdict::Accepted))
    }

    /// Diagonals `(i, j)` of the triangulation, for vertices `i >= min_index`.
    ///
    /// Vertices are numbered `0..N+2` around the polygon. Vertices are walked
    /// from `N-1` down to `min_index`; each diagonal from `i` goes to the
    /// nearest vertex past `i + 1` not yet hidden behind an earlier diagonal.
    pub fn diagonals(&self, min_index: usize) -> Vec<(usize, usize)> {
        let n = self.len();
        let mut visible = vec![true; n + 2];
        let mut edges = Vec::new();

        for i in (min_index..n).rev() {
            let mut remaining = self.0[i];
            let mut j = i + 2;
            while remaining > 0 {
                while j < n + 2 && !visible[j] {
                    j += 1;
                }
                edges.push((i, j));
                for hidden in visible.iter_mut().take(j.min(n + 2)).skip(i + 1) {
                    *hidden = false;
                }
                remaining -= 1;
                j += 1;
            }
        }
        edges
    }
}

impl Deref for Codeword {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for Codeword {
    fn from(values: Vec<u64>) -> Self {
        Codeword(values)
    }
}

impl<const N: usize> From<[u64; N]> for Codeword {
    fn from(values: [u64; N]) -> Self {
        Codeword(values.to_vec())
    }
}

impl FromIterator<u64> for Codeword {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Codeword(iter.into_iter().collect())
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// Displays a slice of codewords as `[[a, b], [c, d]]`.
pub struct CodeList<'a>(pub &'a [Codeword]);

impl fmt::Display for CodeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", code)?;
        }
        write!(f, "]")
    }
}

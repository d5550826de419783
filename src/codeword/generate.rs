// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gray-code enumeration of codewords.
//!
//! Starting from the fan `[n-1, 0, ..., 0]`, the walk visits every codeword
//! of length `n` exactly once. Consecutive codewords differ by moving a
//! single unit between two positions (a *push* or a *pull*), which is a
//! single diagonal flip of the triangulation.
//!
//! The walk recurses from position `n-1` down to position 1. At each level,
//! `max_value[p]` is the number of moves position `p` can make given the
//! positions above it, and `direction[p]` records whether the moves add to
//! (`Up`) or drain (`Down`) the entry. The partner position for every move
//! is `push_point[p]`, which is updated as levels complete.

use log::debug;

use super::{Codeword, CodewordTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Every codeword of length `n`, in Gray-code order.
///
/// There are Catalan(n) of them; `n = 0` yields an empty table.
///
/// ```
/// use stack_codes::codeword::{generate, CodewordTable, NamedTable};
///
/// assert_eq!(generate(5), CodewordTable::named(NamedTable::N5));
/// assert_eq!(generate(6).len(), 132);
/// ```
pub fn generate(n: usize) -> CodewordTable {
    if n == 0 {
        return CodewordTable::default();
    }
    let mut walk = GrayWalk::new(n);
    walk.visit(n - 1);
    debug!("generated {} codewords of length {}", walk.found.len(), n);
    CodewordTable::new(walk.found)
}

/// State of the walk. Entries are signed because the recurrence for
/// `max_value` may dip below zero at positions that then make no moves.
struct GrayWalk {
    n: usize,
    codeword: Vec<i64>,
    direction: Vec<Direction>,
    push_point: Vec<usize>,
    max_value: Vec<i64>,
    found: Vec<Codeword>,
}

impl GrayWalk {
    fn new(n: usize) -> Self {
        let mut codeword = vec![0; n];
        codeword[0] = n as i64 - 1;
        let mut walk = Self {
            n,
            codeword,
            direction: vec![Direction::Up; n],
            push_point: vec![0; n],
            max_value: vec![0; n],
            found: Vec::new(),
        };
        walk.record();
        walk
    }

    fn visit(&mut self, position: usize) {
        if position == 0 {
            return;
        }

        self.max_value[position] = if position == self.n - 1 {
            1
        } else {
            self.max_value[position + 1] + 1 - self.codeword[position + 1]
        };

        self.direction[position] = if self.codeword[position] == 0 {
            Direction::Up
        } else {
            Direction::Down
        };

        self.visit(position - 1);

        for _ in 0..self.max_value[position] {
            let partner = self.push_point[position];
            match self.direction[position] {
                Direction::Up => self.pull(position, partner),
                Direction::Down => self.push(position, partner),
            }
            self.visit(position - 1);
        }

        if position != self.n - 1 {
            self.push_point[position + 1] = match self.direction[position] {
                Direction::Up => position,
                Direction::Down => self.push_point[position],
            };
        }
    }

    /// Move one unit from `from` to `to`.
    fn push(&mut self, from: usize, to: usize) {
        self.codeword[from] -= 1;
        self.codeword[to] += 1;
        self.record();
    }

    /// Move one unit from `from` back to `to`.
    fn pull(&mut self, to: usize, from: usize) {
        self.codeword[to] += 1;
        self.codeword[from] -= 1;
        self.record();
    }

    fn record(&mut self) {
        debug_assert!(self.codeword.iter().all(|&v| v >= 0));
        self.found
            .push(self.codeword.iter().map(|&v| v as u64).collect());
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for the stacking program.
//!
//! The context combines:
//! - Immutable inputs: the candidate codewords and the `(d, h)` parameters
//! - Per-choice state: the candidate currently under consideration
//! - Results: accepted codewords in table order, statistics, and any error

use crate::codeword::Codeword;
use crate::error::StackError;
use crate::stack::StackParams;
use crate::state::statistics::Statistics;

#[derive(Debug)]
pub struct SearchContext {
    /// Candidates, in table order.
    pub codewords: Vec<Codeword>,

    pub params: StackParams,

    /// Index into `codewords` of the candidate being tested.
    ///
    /// Set by [`TablePredicate`](crate::predicates::TablePredicate) on each choice.
    pub current: Option<usize>,

    /// Candidates that reached the collecting predicate, in the order found.
    pub accepted: Vec<Codeword>,

    pub statistics: Statistics,

    /// First error raised by a predicate. The search keeps running to
    /// exhaustion; callers check this afterwards.
    pub error: Option<StackError>,
}

impl SearchContext {
    pub fn new(codewords: Vec<Codeword>, params: StackParams) -> Self {
        Self {
            codewords,
            params,
            current: None,
            accepted: Vec::new(),
            statistics: Statistics::new(),
            error: None,
        }
    }

    /// The candidate under consideration, if a choice has been made.
    pub fn current_codeword(&self) -> Option<&Codeword> {
        self.current.and_then(|index| self.codewords.get(index))
    }

    /// Record `error` unless an earlier one is already held.
    pub fn fail_with(&mut self, error: StackError) {
        self.error.get_or_insert(error);
    }
}

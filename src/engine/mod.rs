// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence, WAM style:
//!
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent entry with choices left
//! 6. If Suspend: pause and return control to caller
//!
//! Programs end with a terminal predicate. Ending with
//! [`FailPredicate`](crate::predicates::FailPredicate) makes the engine
//! exhaust every choice, which is how a table is filtered: each surviving
//! candidate is recorded by a predicate on its way to the terminal failure.
//!
//! # Example
//!
//! ```
//! use stack_codes::engine::EngineBuilder;
//! use stack_codes::context::SearchContext;
//! use stack_codes::predicates::{FailPredicate, TablePredicate};
//! use stack_codes::codeword::{CodewordTable, NamedTable};
//! use stack_codes::stack::StackParams;
//!
//! let table = CodewordTable::named(NamedTable::N4);
//! let mut ctx = SearchContext::new(table.into_rows(), StackParams::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(TablePredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Engine is consumed; None means every choice was exhausted.
//! assert!(engine.search(&mut ctx).is_none());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use log::debug;

use crate::context::SearchContext;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether try_pred has run for this entry.
    tried: bool,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn at(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            tried: false,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which checks the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - can resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are delivered through `ctx`, not the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or SUSPEND.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry::at(0, 0));
        } else {
            // Resuming after Suspend: the suspending entry behaves as a failure.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                debug!(
                    "search exhausted after {} tries, {} retries",
                    self.try_count, self.retry_count
                );
                return None;
            };

            if !entry.in_choice_mode {
                if entry.tried {
                    // A deterministic predicate has no alternatives: keep backtracking.
                    self.stack.pop();
                    continue;
                }
                entry.tried = true;

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self) {
        let next_index = self.current().predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }
        self.stack.push(StackEntry::at(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        let current = self.current();
        let entry = StackEntry::at(current.predicate_index, current.round + 1);
        self.stack.push(entry);
    }

    fn current(&self) -> &StackEntry {
        self.stack
            .last()
            .expect("engine pushes only while an entry is active")
    }

    /// Returns (try_count, retry_count).
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program ends with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate; only `build` can follow.
    pub fn terminal<T: TerminalPredicate + 'static>(
        mut self,
        predicate: Box<T>,
    ) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// An [`EngineBuilder`] after its terminal predicate.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

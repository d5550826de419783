// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `stacking`: the predicates that filter a codeword table
//! - Built-in predicates: `FailPredicate`
//!
//! The stacking program is
//!
//! ```text
//! Table -> Count(Candidates) -> Stacking -> Count(Accepted) -> Collect -> Fail
//! ```
//!
//! `Table` offers one choice per codeword. `Stacking` fails rejected
//! candidates, so only survivors reach `Collect`. `Fail` backtracks into the
//! next table choice until the table is exhausted.

pub mod stacking;

pub use stacking::{CollectPredicate, StackingPredicate, TablePredicate};

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine, TerminalPredicate};
use crate::state::{Counters, Statistics};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As the terminal predicate
/// it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use stack_codes::engine::EngineBuilder;
/// use stack_codes::predicates::FailPredicate;
/// use stack_codes::context::SearchContext;
/// use stack_codes::stack::StackParams;
///
/// let mut ctx = SearchContext::new(vec![], StackParams::default());
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// The engine that filters `ctx.codewords` into `ctx.accepted`.
pub fn stacking_program() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(TablePredicate))
        .add(Statistics::counting_predicate(Counters::Candidates, None))
        .add(Box::new(StackingPredicate))
        .add(Statistics::counting_predicate(Counters::Accepted, None))
        .add(Box::new(CollectPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

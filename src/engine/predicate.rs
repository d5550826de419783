// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is a choice point: it can succeed, fail, or offer several alternatives.
//!
//! # Example
//!
//! ```
//! use stack_codes::engine::{Predicate, PredicateResult};
//! use stack_codes::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct LongTable;
//!
//! impl Predicate for LongTable {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         if ctx.codewords.len() > 10 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "LongTable"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::SearchContext;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that ends a program: it never returns Success.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// these, so a built program cannot run off its end.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choices `0..n`, one per backtrack
///
/// Predicates communicate through `SearchContext`. Anything a predicate
/// writes there is overwritten by the next choice, not restored.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// Cannot return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging; defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that filter a codeword table by the stacking predicate.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::stack::{evaluate, log_verdict, Rejection, Verdict};
use crate::state::Counters;

/// Chooses each codeword of the table in turn.
///
/// Choice `i` selects `ctx.codewords[i]`, so survivors are found in table order.
#[derive(Debug)]
pub struct TablePredicate;

impl Predicate for TablePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.codewords.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(ctx.codewords.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        if choice < ctx.codewords.len() {
            ctx.current = Some(choice);
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Table"
    }
}

/// Fails unless the current codeword stacks for `ctx.params`.
#[derive(Debug)]
pub struct StackingPredicate;

impl Predicate for StackingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(index) = ctx.current else {
            return PredicateResult::Failure;
        };
        let code = &ctx.codewords[index];
        if let Err(error) = ctx.params.require_fits(index, code) {
            ctx.fail_with(error);
            return PredicateResult::Failure;
        }

        let verdict = evaluate(code, ctx.params);
        log_verdict(code, verdict);
        match verdict {
            Verdict::Accepted => PredicateResult::Success,
            Verdict::Rejected(rejection) => {
                let counter = match rejection {
                    Rejection::Balance => Counters::RejectedBalance,
                    Rejection::Capacity { .. } => Counters::RejectedCapacity,
                };
                ctx.statistics.increment_counter(counter);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Stacking"
    }
}

/// Records the current codeword in `ctx.accepted`.
#[derive(Debug)]
pub struct CollectPredicate;

impl Predicate for CollectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.current_codeword().cloned() {
            Some(code) => {
                ctx.accepted.push(code);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Collect"
    }
}

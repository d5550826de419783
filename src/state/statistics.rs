// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Codewords offered by the table predicate.
    Candidates,
    /// Codewords that passed the stacking predicate.
    Accepted,
    /// Rejected by the balance condition on `w[0]`.
    RejectedBalance,
    /// Rejected by a capacity condition on `w[1..d]`.
    RejectedCapacity,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn rejected(&self) -> u64 {
        self.get(Counters::RejectedBalance) + self.get(Counters::RejectedCapacity)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

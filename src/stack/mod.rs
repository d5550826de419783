// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The stacking predicate.
//!
//! A codeword `w` stacks for parameters `(d, h)` when
//!
//! 1. `w[0] == (d + h - 2) - sum(w[1..d+1])`, and
//! 2. `w[i] <= (d + h - 1) - i - sum(w[i+1..d+1])` for every `i` in `1..d`.
//!
//! All ranges are half-open. With `d <= 1` the second family is empty.
//!
//! [`stack`] runs the predicate over a table using the search engine and
//! returns the survivors in table order. [`check`] decides one codeword.

pub mod derive;

pub use derive::{derive, Derivation};

use log::{debug, trace};

use crate::codeword::Codeword;
use crate::context::SearchContext;
use crate::error::{Result, StackError};
use crate::predicates::stacking_program;

/// Dimension `d` and height `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackParams {
    pub d: usize,
    pub h: usize,
}

impl StackParams {
    pub fn new(d: usize, h: usize) -> Self {
        Self { d, h }
    }

    /// Minimum codeword length: the predicate reads indices `0..=d`.
    ///
    /// Saturates at `usize::MAX`, which no codeword reaches.
    pub fn required_len(&self) -> usize {
        self.d.saturating_add(1)
    }

    /// `d + h`, without overflow.
    fn span(&self) -> i128 {
        self.d as i128 + self.h as i128
    }

    /// Budget on the right of condition 1: `d + h - 2`.
    fn balance_budget(&self) -> i128 {
        self.span() - 2
    }

    /// Budget for position `i` in condition 2: `d + h - 1 - i`.
    fn capacity_budget(&self, i: usize) -> i128 {
        self.span() - 1 - i as i128
    }

    /// Error unless `code` is long enough for these parameters.
    pub fn require_fits(&self, index: usize, code: &Codeword) -> Result<()> {
        if code.len() <= self.d {
            return Err(StackError::CodewordTooShort {
                index,
                len: code.len(),
                required: self.required_len(),
            });
        }
        Ok(())
    }
}

impl Default for StackParams {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// Why a codeword failed to stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `w[0]` does not balance the budget against `w[1..d+1]`.
    Balance,
    /// `w[index]` exceeds its capacity (first failing index).
    Capacity { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Decide whether one codeword stacks.
///
/// Condition 1 is checked first; a codeword that fails it is reported as
/// [`Rejection::Balance`] whatever the capacity checks would say.
pub fn check(code: &Codeword, params: StackParams) -> Result<Verdict> {
    params.require_fits(0, code)?;
    Ok(evaluate(code, params))
}

/// Both condition families. Callers guarantee `code.len() > params.d`.
pub(crate) fn evaluate(code: &Codeword, params: StackParams) -> Verdict {
    let d = params.d;
    let head = i128::from(code[0]);
    if head != params.balance_budget() - i128::from(code.range_sum(1, d + 1)) {
        return Verdict::Rejected(Rejection::Balance);
    }

    for i in 1..d {
        let capacity = params.capacity_budget(i) - i128::from(code.range_sum(i + 1, d + 1));
        if i128::from(code[i]) > capacity {
            return Verdict::Rejected(Rejection::Capacity { index: i });
        }
    }
    Verdict::Accepted
}

/// Run the stacking program over `codewords`, returning the finished context.
///
/// Every codeword is length-checked before the search starts, so a table
/// that does not fit `params` yields an error and no partial result.
pub fn search(codewords: &[Codeword], params: StackParams) -> Result<SearchContext> {
    for (index, code) in codewords.iter().enumerate() {
        params.require_fits(index, code)?;
    }

    let mut ctx = SearchContext::new(codewords.to_vec(), params);
    let exhausted = stacking_program().search(&mut ctx).is_none();
    debug_assert!(exhausted, "stacking program ends with Fail");

    if let Some(error) = ctx.error.take() {
        return Err(error);
    }
    debug!(
        "stack d={} h={}: {} of {} codewords accepted",
        params.d,
        params.h,
        ctx.accepted.len(),
        codewords.len()
    );
    Ok(ctx)
}

/// The subsequence of `codewords` that stacks for `params`, in original order.
///
/// ```
/// use stack_codes::codeword::{CodewordTable, NamedTable};
/// use stack_codes::stack::{stack, StackParams};
///
/// let table = CodewordTable::named(NamedTable::N5);
/// let valid = stack(table.as_slice(), StackParams::new(2, 4)).unwrap();
/// assert_eq!(valid.len(), 14);
/// ```
pub fn stack(codewords: &[Codeword], params: StackParams) -> Result<Vec<Codeword>> {
    Ok(search(codewords, params)?.accepted)
}

/// Trace a single decision. Used by the stacking predicate.
pub(crate) fn log_verdict(code: &Codeword, verdict: Verdict) {
    match verdict {
        Verdict::Accepted => trace!("{} accepted", code),
        Verdict::Rejected(Rejection::Balance) => trace!("{} rejected: balance", code),
        Verdict::Rejected(Rejection::Capacity { index }) => {
            trace!("{} rejected: capacity at index {}", code, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::{CodewordTable, NamedTable};

    fn cw<const N: usize>(values: [u64; N]) -> Codeword {
        Codeword::from(values)
    }

    #[test]
    fn test_active_configuration_examples() {
        let params = StackParams::default();
        assert_eq!(check(&cw([4, 0, 0, 0, 0]), params), Ok(Verdict::Accepted));
        assert_eq!(check(&cw([3, 1, 0, 0, 0]), params), Ok(Verdict::Accepted));
        assert_eq!(check(&cw([2, 2, 0, 0, 0]), params), Ok(Verdict::Accepted));
    }

    #[test]
    fn test_balance_rejection() {
        let params = StackParams::default();
        // 1 != 4 - (0 + 2)
        assert_eq!(
            check(&cw([1, 0, 2, 1, 0]), params),
            Ok(Verdict::Rejected(Rejection::Balance))
        );
        // Entries past index d do not count towards the balance.
        assert_eq!(
            check(&cw([3, 0, 0, 1, 0]), params),
            Ok(Verdict::Rejected(Rejection::Balance))
        );
    }

    #[test]
    fn test_capacity_rejection() {
        // d = 2, h = 1: w[0] == 1 - (w1 + w2) and w[1] <= 1 - w[2].
        let params = StackParams::new(2, 1);
        assert_eq!(check(&cw([0, 1, 0]), params), Ok(Verdict::Accepted));
        assert_eq!(check(&cw([1, 0, 0]), params), Ok(Verdict::Accepted));
        // d = 3, h = 0: w[0] = 1 - (w1 + w2 + w3), w[1] <= 1 - (w2 + w3), w[2] <= -w3.
        let params = StackParams::new(3, 0);
        assert_eq!(check(&cw([1, 0, 0, 0]), params), Ok(Verdict::Accepted));
        assert_eq!(
            check(&cw([0, 0, 0, 1]), params),
            Ok(Verdict::Rejected(Rejection::Capacity { index: 2 }))
        );
    }

    #[test]
    fn test_first_failing_index_reported() {
        // d = 4, h = 2: capacities are 4, 3, 2 at i = 1, 2, 3, less the tail sum.
        let params = StackParams::new(4, 2);
        // Tail sum 4 at i = 2 leaves -1.
        assert_eq!(
            check(&cw([0, 0, 0, 0, 4]), params),
            Ok(Verdict::Rejected(Rejection::Capacity { index: 2 }))
        );
        // Passes at i = 1 and 2, fails at i = 3.
        assert_eq!(
            check(&cw([1, 0, 0, 0, 3]), params),
            Ok(Verdict::Rejected(Rejection::Capacity { index: 3 }))
        );
    }

    #[test]
    fn test_low_dimension_has_no_capacity_checks() {
        // d = 1: only w[0] == h - 1 - w[1].
        let params = StackParams::new(1, 4);
        assert_eq!(check(&cw([3, 0, 9, 9]), params), Ok(Verdict::Accepted));
        assert_eq!(check(&cw([0, 3]), params), Ok(Verdict::Accepted));
        assert_eq!(
            check(&cw([0, 2]), params),
            Ok(Verdict::Rejected(Rejection::Balance))
        );

        // d = 0: w[0] == h - 2.
        let params = StackParams::new(0, 5);
        assert_eq!(check(&cw([3]), params), Ok(Verdict::Accepted));
        assert_eq!(
            check(&cw([2, 1]), params),
            Ok(Verdict::Rejected(Rejection::Balance))
        );
    }

    #[test]
    fn test_negative_budget() {
        // d + h - 2 < 0 cannot be matched by a non-negative entry.
        let params = StackParams::new(1, 0);
        assert_eq!(
            check(&cw([0, 0]), params),
            Ok(Verdict::Rejected(Rejection::Balance))
        );
    }

    #[test]
    fn test_too_short() {
        let params = StackParams::new(4, 4);
        assert_eq!(
            check(&cw([1, 2, 3, 4]), params),
            Err(StackError::CodewordTooShort {
                index: 0,
                len: 4,
                required: 5
            })
        );
    }

    #[test]
    fn test_stack_active_table() {
        let table = CodewordTable::named(NamedTable::N5);
        let valid = stack(table.as_slice(), StackParams::default()).unwrap();
        assert_eq!(valid.len(), 14);
        // The survivors are exactly the first 14 rows of the table.
        assert_eq!(valid.as_slice(), &table.as_slice()[..14]);
    }

    #[test]
    fn test_stack_other_parameters() {
        let table = CodewordTable::named(NamedTable::N5);
        let count = |d, h| stack(table.as_slice(), StackParams::new(d, h)).unwrap().len();
        assert_eq!(count(1, 4), 12);
        assert_eq!(count(2, 2), 10);
        assert_eq!(count(3, 2), 14);
        assert_eq!(count(3, 3), 28);
        assert_eq!(count(4, 2), 42);
        assert_eq!(count(3, 4), 0);
        assert_eq!(count(1, 1), 0);
    }

    #[test]
    fn test_stack_reports_first_short_row() {
        let rows = vec![cw([2, 0, 0]), cw([1, 1]), cw([0])];
        assert_eq!(
            stack(&rows, StackParams::new(2, 2)),
            Err(StackError::CodewordTooShort {
                index: 1,
                len: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_stack_empty() {
        assert_eq!(stack(&[], StackParams::default()), Ok(vec![]));
    }

    #[test]
    fn test_extreme_parameters_do_not_overflow() {
        let table = CodewordTable::named(NamedTable::N5);
        // w[0] can never reach a budget near usize::MAX.
        assert_eq!(stack(table.as_slice(), StackParams::new(2, usize::MAX)), Ok(vec![]));
        assert_eq!(
            stack(table.as_slice(), StackParams::new(usize::MAX, 4)),
            Err(StackError::CodewordTooShort {
                index: 0,
                len: 5,
                required: usize::MAX
            })
        );
        assert_eq!(
            check(&cw([4, 0, 0, 0, 0]), StackParams::new(usize::MAX, usize::MAX)),
            Err(StackError::CodewordTooShort {
                index: 0,
                len: 5,
                required: usize::MAX
            })
        );
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stacking codewords of polygon triangulations.
//!
//! A codeword of length `N` is a vector of `N` non-negative integers summing
//! to `N - 1`; the 42 codewords of length 5 are the triangulations of a
//! heptagon. This crate filters a codeword table by a stacking constraint
//! with parameters `d` (dimension) and `h` (height), and derives a reversed
//! code and a `d`-entry short code for each codeword that stacks.
//!
//! # Pipeline
//!
//! 1. **Table**: a fixed table ([`codeword::TABLE_N5`]) or one built by the
//!    Gray-code walk in [`codeword::generate`]
//! 2. **Validator**: [`stack::stack`], run as a search program over the table
//! 3. **Deriver**: [`stack::derive`]
//! 4. **Reporter**: [`report::Report`]
//!
//! # Search Engine
//!
//! The validator is a WAM-style backtracking program: a table predicate
//! offers each codeword as a choice, the stacking predicate fails those that
//! do not stack, survivors are collected, and a terminal `Fail` forces the
//! engine to exhaust every choice.
//!
//! # References
//!
//! - Zerling, D. (1985). "Generating binary trees using rotations." Journal of the ACM 32(3).

pub mod codeword;
pub mod context;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod report;
pub mod stack;
pub mod state;

// Re-export commonly used types
pub use codeword::{Codeword, CodewordTable, NamedTable};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Result, StackError};
pub use stack::{stack, Derivation, StackParams};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state carried in the context.

pub mod statistics;

pub use statistics::{Counters, Statistics};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use stack_codes::NamedTable;

/// Upper bound for `d` and `h`.
const MAX_PARAMETER: u64 = 1 << 16;

/// Longest codeword `--generate` accepts; the table has Catalan(N) rows.
const MAX_GENERATE: u64 = 12;

#[derive(Parser, Debug)]
#[command(
    name = "stack",
    version,
    about = "Filter triangulation codewords by the (d, h) stacking constraint"
)]
pub struct Cli {
    /// Dimension parameter d; the predicate reads codeword entries 0..=d
    #[arg(
        short = 'd',
        long = "dimension",
        default_value_t = 2,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PARAMETER)
    )]
    pub d: usize,

    /// Height parameter h
    #[arg(
        long,
        default_value_t = 4,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PARAMETER)
    )]
    pub height: usize,

    /// Built-in codeword table
    #[arg(long, value_enum, default_value_t = TableArg::N5, conflicts_with = "generate")]
    pub table: TableArg,

    /// Generate all codewords of this length instead of using a built-in table
    #[arg(
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_GENERATE)
    )]
    pub generate: Option<usize>,

    /// Also print the triangulation diagonals of each stacking codeword
    #[arg(long)]
    pub diagonals: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    /// 42 codewords of length 5
    N5,
    /// 14 codewords of length 4
    N4,
}

impl From<TableArg> for NamedTable {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::N5 => NamedTable::N5,
            TableArg::N4 => NamedTable::N4,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Console report of a stacking run.

use std::io::{self, Write};

use crate::codeword::{CodeList, Codeword, CodewordTable};
use crate::error::Result;
use crate::stack::{derive, search, Derivation, StackParams};
use crate::state::Statistics;

/// Everything printed for one `(table, d, h)` run.
#[derive(Debug, Clone)]
pub struct Report {
    params: StackParams,
    table_reversed: Vec<Codeword>,
    valid: Vec<Codeword>,
    derivations: Vec<Derivation>,
    statistics: Statistics,
    show_diagonals: bool,
}

impl Report {
    /// Stack `table` and derive the short and reversed codes of the survivors.
    pub fn new(table: &CodewordTable, params: StackParams) -> Result<Self> {
        let ctx = search(table.as_slice(), params)?;
        let derivations = derive(&ctx.accepted, params.d);
        Ok(Self {
            params,
            table_reversed: table.reversed(),
            valid: ctx.accepted,
            derivations,
            statistics: ctx.statistics,
            show_diagonals: false,
        })
    }

    /// Also print the triangulation diagonals of every stacking codeword.
    pub fn with_diagonals(mut self, show: bool) -> Self {
        self.show_diagonals = show;
        self
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Reversed Codes:  {}", CodeList(&self.table_reversed))?;
        writeln!(out)?;
        writeln!(out, "stack length: {}", self.valid.len())?;
        writeln!(out, "d = {}", self.params.d)?;
        writeln!(out, "Height = {}", self.params.h)?;

        for derivation in &self.derivations {
            writeln!(
                out,
                "stack_code: {} code_word: {}",
                derivation.short_code, derivation.reversed
            )?;
        }

        let reversed: Vec<Codeword> = self.derivations.iter().map(|d| d.reversed.clone()).collect();
        let short: Vec<Codeword> = self.derivations.iter().map(|d| d.short_code.clone()).collect();
        writeln!(out, "{}", CodeList(&reversed))?;
        writeln!(out, "{}", CodeList(&short))?;

        if self.show_diagonals {
            for code in &self.valid {
                let diagonals: Vec<String> = code
                    .diagonals(0)
                    .iter()
                    .map(|(i, j)| format!("({}, {})", i, j))
                    .collect();
                writeln!(out, "diagonals: {} -> [{}]", code, diagonals.join(", "))?;
            }
        }
        Ok(())
    }
}

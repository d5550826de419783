// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod cli;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::Cli;
use stack_codes::codeword::generate;
use stack_codes::report::Report;
use stack_codes::{CodewordTable, StackParams};

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let table = match cli.generate {
        Some(n) => generate(n),
        None => CodewordTable::named(cli.table.into()),
    };
    let width = table.check_uniform().context("invalid codeword table")?;
    info!("{} codewords of length {}", table.len(), width);

    let params = StackParams::new(cli.d, cli.height);
    let report = Report::new(&table, params)
        .with_context(|| format!("cannot stack with d = {}, h = {}", params.d, params.h))?
        .with_diagonals(cli.diagonals);
    info!("{}", report.statistics());

    let mut out = BufWriter::new(io::stdout().lock());
    report.write_to(&mut out).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}

use std::io::Write;

use anyhow::{Context, Result};

use octa_forge::enumerate_arrangements_with;

use crate::cli::EnumerateArgs;
use crate::display::{Context as DisplayContext, print_arrangements};
use crate::io::{create_output, stdout_is_tty};

pub fn run_enumerate(args: EnumerateArgs, ctx: DisplayContext) -> Result<()> {
    let arrangements = enumerate_arrangements_with(&args.ligands[..], args.dedup.into())
        .context("Failed to enumerate arrangements")?;

    if ctx.interactive && stdout_is_tty() {
        print_arrangements(arrangements.iter());
        return Ok(());
    }

    let mut out = create_output(None)?;
    for (i, arrangement) in arrangements.iter().enumerate() {
        writeln!(out, "{}\t{}", i + 1, arrangement)?;
    }
    out.flush()?;

    Ok(())
}

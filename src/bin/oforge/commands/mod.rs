mod build;
mod enumerate;
mod library;

use build::run_build;
use enumerate::run_enumerate;
use library::run_library;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Build(args) => run_build(args, ctx),
        Command::Enumerate(args) => run_enumerate(args, ctx),
        Command::Library(args) => run_library(args, ctx),
    }
}

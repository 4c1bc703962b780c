//! The main entry point for the `unpin` command-line application.
//!
//! This file is responsible for parsing command-line arguments, resolving the
//! directory containing the executable, and dispatching to the library's
//! `run_strip` entry point.

use std::env;
use unpin::cli;
use unpin::errors::Result;
use unpin::stripper;

/// The main function of the application.
///
/// The tool takes no arguments; it always operates on the directory that
/// contains the executable itself, not the current working directory. Exits
/// successfully after the summary regardless of per-file failures.
fn main() -> Result<()> {
    let _args = cli::parse_args();

    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or("could not determine the directory containing the executable")?;

    stripper::run_strip(dir)?;
    Ok(())
}

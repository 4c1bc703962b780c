use clap::Parser;

/// A zero-configuration version-pin remover.
///
/// `unpin` takes no arguments at all: it always operates on the directory
/// containing the executable itself, with a fixed extension allowlist. The
/// clap surface exists to provide `--help`/`--version` and to reject any
/// stray arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove @x.y.z version pins from import statements",
    long_about = "unpin - Removes version pins from import statements.

Scans the directory containing the unpin executable (not the current working
directory) for .ts, .tsx, .js, and .jsx files, inspects the first 10 lines of
each, and strips version specifiers such as @1.2.3 from import-like lines,
rewriting the file in place when anything changed.

Takes no flags and reads no configuration; just run:
  unpin"
)]
pub struct Args {}

/// Parses command-line arguments and returns the populated `Args` struct.
pub fn parse_args() -> Args {
    Args::parse()
}

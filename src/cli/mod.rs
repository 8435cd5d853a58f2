//! Command line interface
//!
//! `serve` runs the HTTP search endpoint over a seeded in-memory index;
//! `search` runs one query from the command line and prints JSON.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    commands::dispatch(cli.command)
}

//! # notesite CLI
//!
//! This is the binary entry point for the `notesite` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting any error as a single `Error: ...` line with a non-zero exit
//!   status.
//!
//! The build pipeline itself lives in the `notesite` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

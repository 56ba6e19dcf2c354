//! # clone
//!
//! This is the binary entry point for the `clone` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the clone command with the real git and GitHub collaborators.
//! - Turning library errors into a message on stderr and exit code 1.
//!
//! The parsing and path-resolution logic lives in the `repoclone` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

//! `devhub` command line probe.
//!
//! # Responsibility
//! - Exercise search, palette sessions and reordering against demo data.
//! - Print results as text or JSON for quick local checks.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli)
}

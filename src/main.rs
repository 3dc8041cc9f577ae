//! envstrap - sequenced environment bootstrapper
//!
//! Bootstraps a pip-managed Python environment in three fixed steps:
//! upgrade the installer itself, install the pinned scientific foundation,
//! then install the dependency manifest on top of it.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod foundation;
mod installer;
mod manifest;
mod progress;
mod report;
mod sequence;
mod ui;
mod workspace;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.workspace, cli.verbose, args),
        Commands::Check(args) => commands::check::run(cli.workspace, cli.verbose, args),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

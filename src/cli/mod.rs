//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run command arguments
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod run;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use run::RunArgs;

/// envstrap - sequenced environment bootstrapper
///
/// Upgrade the package installer, install the pinned scientific foundation,
/// then install the dependency manifest, in that fixed order.
#[derive(Parser, Debug)]
#[command(
    name = "envstrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sequenced bootstrapper for pip-managed Python environments",
    long_about = "envstrap bootstraps a Python package environment in three fixed steps: \
                  upgrade the installer itself, install a pinned set of scientific libraries \
                  at mutually binary-compatible versions, then install everything listed in \
                  the dependency manifest on top of that foundation.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  envstrap run                          \x1b[90m# Bootstrap with the defaults\x1b[0m\n   \
                  envstrap run --strict                 \x1b[90m# Halt at the first failing step\x1b[0m\n   \
                  envstrap run --dry-run                \x1b[90m# Show the plan without installing\x1b[0m\n   \
                  envstrap run --manifest deps.txt      \x1b[90m# Use another manifest file\x1b[0m\n   \
                  envstrap check                        \x1b[90m# Lint the manifest against the pins\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "ENVSTRAP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the three-step bootstrap sequence
    Run(RunArgs),

    /// Lint the dependency manifest against the pinned foundation
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

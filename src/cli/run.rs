use clap::Parser;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Bootstrap with the defaults:\n    envstrap run\n\n\
                   Halt at the first failing step:\n    envstrap run --strict\n\n\
                   Let the manifest override a pinned version:\n    envstrap run --allow-override\n\n\
                   Invoke pip through a specific interpreter:\n    envstrap run --installer python3.11")]
pub struct RunArgs {
    /// Abort at the first failing step instead of continuing
    #[arg(long)]
    pub strict: bool,

    /// Show the planned commands without invoking the installer
    #[arg(long)]
    pub dry_run: bool,

    /// Dependency manifest path (relative to the workspace root)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Installer program to invoke instead of the configured one
    #[arg(long, value_name = "PROGRAM", env = "ENVSTRAP_INSTALLER")]
    pub installer: Option<String>,

    /// Proceed when the manifest pins a foundation package to another
    /// version; the manifest step runs last, so its version wins
    #[arg(long)]
    pub allow_override: bool,

    /// Emit a machine-readable JSON report instead of styled output
    #[arg(long)]
    pub json: bool,
}

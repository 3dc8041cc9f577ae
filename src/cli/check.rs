use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Lint the default manifest:\n    envstrap check\n\n\
                   Lint another manifest:\n    envstrap check --manifest deps/requirements.txt\n\n\
                   Machine-readable report:\n    envstrap check --json")]
pub struct CheckArgs {
    /// Dependency manifest path (relative to the workspace root)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Emit a machine-readable JSON report instead of styled output
    #[arg(long)]
    pub json: bool,
}

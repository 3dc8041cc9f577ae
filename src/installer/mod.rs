//! Package-installer invocation
//!
//! Wraps the external package-management tool as a sequence of blocking
//! process invocations. Stdio is inherited so the tool's own diagnostics
//! stream through untouched; in JSON report mode the child's stdout is
//! silenced because the report replaces human-readable stdout.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::InstallerSettings;
use crate::foundation::Foundation;

/// Exit code reported when the installer program cannot be spawned,
/// matching the shell convention for "command not found".
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// The installer program plus the leading arguments every step shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    program: String,
    leading_args: Vec<String>,
    self_package: String,
    workdir: Option<PathBuf>,
}

impl InstallerCommand {
    pub fn new(settings: &InstallerSettings) -> Self {
        Self {
            program: settings.program.clone(),
            leading_args: settings.args.clone(),
            self_package: settings.self_package.clone(),
            workdir: None,
        }
    }

    /// Run every step from the given directory, so relative manifest paths
    /// resolve against the workspace root rather than the caller's cwd
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Arguments for the self-upgrade step
    pub fn upgrade_args(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            "--upgrade".to_string(),
            self.self_package.clone(),
        ]
    }

    /// Arguments for the pinned-foundation step, in declared order
    pub fn foundation_args(&self, foundation: &Foundation) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        args.extend(foundation.requirements());
        args
    }

    /// Arguments for the manifest step
    pub fn manifest_args(&self, manifest: &Path) -> Vec<String> {
        vec![
            "install".to_string(),
            "-r".to_string(),
            manifest.display().to_string(),
        ]
    }

    /// Full command line for display, leading arguments included
    pub fn command_line(&self, args: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.leading_args.iter().cloned());
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    /// Run one step to completion and return its exit code.
    ///
    /// Spawn failure maps to [`SPAWN_FAILURE_CODE`]; signal termination maps
    /// to 128+signal on Unix.
    pub fn run(&self, args: &[String], silence_stdout: bool) -> i32 {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        if silence_stdout {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        match cmd.status() {
            Ok(status) => exit_code(status),
            Err(_) => SPAWN_FAILURE_CODE,
        }
    }
}

fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

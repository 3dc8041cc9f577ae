//! Common test utilities for envstrap integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install a scripted fake installer and return its path.
    ///
    /// The script appends each invocation's arguments (space-joined, one
    /// line per call) to `fake/calls.log` and exits with the code scripted
    /// for that call number; calls beyond the scripted list exit 0.
    #[cfg(unix)]
    pub fn fake_installer(&self, codes: &[i32]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let fake_dir = self.path.join("fake");
        std::fs::create_dir_all(&fake_dir).expect("Failed to create fake installer directory");

        let codes_text = codes
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(fake_dir.join("codes"), codes_text).expect("Failed to write codes file");

        let script = "#!/bin/sh\n\
                      dir=\"$(cd \"$(dirname \"$0\")\" && pwd)\"\n\
                      printf '%s\\n' \"$*\" >> \"$dir/calls.log\"\n\
                      n=$(grep -c '' \"$dir/calls.log\")\n\
                      code=$(sed -n \"${n}p\" \"$dir/codes\" 2>/dev/null)\n\
                      exit \"${code:-0}\"\n";

        let script_path = fake_dir.join("fake-pip");
        std::fs::write(&script_path, script).expect("Failed to write fake installer");
        let mut perms = std::fs::metadata(&script_path)
            .expect("Failed to stat fake installer")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script_path, perms)
            .expect("Failed to mark fake installer executable");

        script_path
    }

    /// Arguments of every fake-installer invocation so far, one entry per call
    #[cfg(unix)]
    pub fn fake_calls(&self) -> Vec<String> {
        let log = self.path.join("fake").join("calls.log");
        match std::fs::read_to_string(log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the envstrap binary with test-hostile environment scrubbed
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn envstrap_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("envstrap").unwrap();
    cmd.env_remove("ENVSTRAP_WORKSPACE")
        .env_remove("ENVSTRAP_INSTALLER");
    cmd
}

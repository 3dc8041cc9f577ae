//! Settings (envstrap.yaml) data structures
//!
//! The settings file is optional: an absent file yields built-in defaults
//! that reproduce the original bootstrap script exactly. A malformed file is
//! an error, never silently ignored. CLI flags override settings; settings
//! override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, settings};
use crate::foundation::{Foundation, PinnedPackage};

/// Name of the settings file looked up at the workspace root
pub const SETTINGS_FILE: &str = "envstrap.yaml";

/// Default dependency manifest path, relative to the workspace root
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// What to do when the manifest pins a foundation package to another version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Abort the run before the first step (the default)
    #[default]
    Reject,
    /// Warn and proceed; the manifest step runs last, so its version wins
    /// whenever the tool permits the change
    Override,
}

/// Installer tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerSettings {
    /// Program to invoke (e.g. `pip`, `python3`)
    #[serde(default = "default_program")]
    pub program: String,

    /// Leading arguments placed before every step's arguments
    /// (e.g. `["-m", "pip"]` to spell `python3 -m pip`)
    #[serde(default)]
    pub args: Vec<String>,

    /// Package name the self-upgrade step upgrades
    #[serde(default = "default_self_package")]
    pub self_package: String,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            self_package: default_self_package(),
        }
    }
}

fn default_program() -> String {
    "pip".to_string()
}

fn default_self_package() -> String {
    "pip".to_string()
}

/// Settings loaded from envstrap.yaml, merged with CLI flags by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Installer tool configuration
    #[serde(default)]
    pub installer: InstallerSettings,

    /// Dependency manifest path, relative to the workspace root
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Foundation override: replaces the whole built-in pinned set
    #[serde(default)]
    pub foundation: Option<Vec<PinnedPackage>>,

    /// Abort at the first failing step
    #[serde(default)]
    pub strict: bool,

    /// Pin-conflict policy
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        let parsed: Self = serde_yaml::from_str(yaml)
            .map_err(|e| settings::parse_failed(path.display().to_string(), e.to_string()))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Load settings from the workspace root; an absent file yields defaults
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(yaml) => Self::from_yaml(&yaml, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(settings::read_failed(path.display().to_string(), e.to_string())),
        }
    }

    /// The effective foundation: the override when present, else the default trio
    pub fn foundation(&self) -> Foundation {
        match &self.foundation {
            Some(packages) => Foundation::new(packages.clone()),
            None => Foundation::default(),
        }
    }

    /// The effective manifest path, relative to the workspace root
    pub fn manifest(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    fn validate(&self) -> Result<()> {
        if self.installer.program.trim().is_empty() {
            return Err(settings::invalid("installer program must not be blank"));
        }
        if self.installer.self_package.trim().is_empty() {
            return Err(settings::invalid("installer self_package must not be blank"));
        }
        self.foundation().validate()?;
        Ok(())
    }
}

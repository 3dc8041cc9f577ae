//! Workspace-root resolution and path handling
//!
//! The workspace root is the `--workspace` directory or the current
//! directory; it must exist. The settings file is looked up only at the
//! root, and the manifest path from flags/settings resolves relative to it.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{Result, workspace};

/// Resolve the workspace root from the global flag, defaulting to the
/// current directory. The directory must exist.
pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let root = match flag {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| workspace::not_found(format!("current directory: {e}")))?,
    };

    if !root.is_dir() {
        return Err(workspace::not_found(root.display().to_string()));
    }

    Ok(root)
}

/// Resolve a manifest path against the workspace root; absolute paths pass
/// through untouched.
pub fn resolve_manifest(root: &Path, manifest: &Path) -> PathBuf {
    if manifest.is_absolute() {
        manifest.to_path_buf()
    } else {
        root.join(manifest)
    }
}

/// Normalized path for display: logical normalization first, with Windows
/// UNC prefixes simplified away.
pub fn display_path(path: &Path) -> String {
    let normalized = path
        .normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| path.to_path_buf());
    dunce::simplified(&normalized).display().to_string()
}

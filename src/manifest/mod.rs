//! Dependency manifest reading
//!
//! The manifest is an opaque input for installation purposes: the path is
//! handed to the package manager and the tool owns format validation. The
//! parsing here exists only for the pin-conflict scan and the `check`
//! command, so it is deliberately permissive: anything it cannot understand
//! is skipped and left for the tool to diagnose.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, manifest};
use crate::foundation::Foundation;

/// A requirement line the scanner could make sense of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Normalized package name (PEP 503: lowercase, `-`/`_`/`.` runs collapsed)
    pub name: String,

    /// Exact version when the line is an `==` pin, `None` for any other
    /// constraint form (ranges, bare names, URLs, ...)
    pub pin: Option<String>,

    /// Manifest file the line came from
    pub file: PathBuf,

    /// 1-based line number within that file
    pub line: usize,
}

/// A manifest `==` pin that disagrees with the pinned foundation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConflict {
    /// Foundation package name as declared in the foundation set
    pub package: String,
    /// Version the foundation pins
    pub pinned_version: String,
    /// Version the manifest pins instead
    pub manifest_version: String,
    /// `file:line` of the conflicting manifest entry
    pub location: String,
}

/// Result of scanning a manifest tree (the file plus nested `-r` includes)
#[derive(Debug, Default)]
pub struct ManifestScan {
    pub requirements: Vec<Requirement>,
    pub conflicts: Vec<PinConflict>,
}

/// Normalize a package name per PEP 503: lowercase with runs of
/// `-`, `_`, and `.` collapsed to a single `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut previous_was_separator = false;

    for ch in name.chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !previous_was_separator {
                normalized.push('-');
            }
            previous_was_separator = true;
        } else {
            normalized.extend(ch.to_lowercase());
            previous_was_separator = false;
        }
    }

    normalized
}

/// Parse one manifest line into a requirement, if it names a package.
///
/// Comments, blank lines, option lines (`-r`, `--index-url`, ...), and
/// URL/path requirements yield `None`.
pub fn parse_requirement_line(raw: &str) -> Option<(String, Option<String>)> {
    let line = strip_comment(raw).trim();
    if line.is_empty() || line.starts_with('-') {
        return None;
    }

    // URL and path requirements carry no comparable name
    if line.contains("://") || line.starts_with('.') || line.starts_with('/') {
        return None;
    }

    // Environment markers apply after the constraint; drop them
    let line = line.split(';').next().unwrap_or(line).trim();

    let name_end = line
        .find(|c: char| matches!(c, '<' | '>' | '=' | '!' | '~' | '[' | '@' | ' ' | '\t'))
        .unwrap_or(line.len());
    let name = &line[..name_end];
    if name.is_empty() {
        return None;
    }

    let rest = line[name_end..].trim_start_matches(|c: char| c == '[');
    let rest = match rest.find(']') {
        Some(pos) => rest[pos + 1..].trim(),
        None => line[name_end..].trim(),
    };

    // Only a plain `==` pin participates in the conflict policy; `===` and
    // every other operator leave resolution to the tool.
    let pin = rest
        .strip_prefix("==")
        .filter(|v| !v.starts_with('='))
        .map(|v| v.trim().trim_end_matches(',').to_string())
        .filter(|v| !v.is_empty() && !v.contains(','));

    Some((normalize_name(name), pin))
}

fn strip_comment(line: &str) -> &str {
    // A '#' starts a comment at line start or after whitespace (pip rule)
    let bytes = line.as_bytes();
    for (idx, &b) in bytes.iter().enumerate() {
        if b == b'#' && (idx == 0 || bytes[idx - 1].is_ascii_whitespace()) {
            return &line[..idx];
        }
    }
    line
}

/// Extract the include target from a `-r`/`--requirement` option line
fn include_target(raw: &str) -> Option<&str> {
    let line = strip_comment(raw).trim();
    for prefix in ["-r", "--requirement"] {
        if let Some(rest) = line.strip_prefix(prefix) {
            let target = rest.strip_prefix('=').unwrap_or(rest).trim();
            if !target.is_empty() {
                return Some(target);
            }
        }
    }
    None
}

/// Read a manifest tree and collect requirements plus foundation conflicts.
///
/// Errors only when the root manifest itself cannot be read; unreadable
/// nested includes and include cycles are skipped.
pub fn scan(path: &Path, foundation: &Foundation) -> Result<ManifestScan> {
    let mut scan = ManifestScan::default();
    let mut visited = HashSet::new();
    scan_file(path, foundation, &mut scan, &mut visited, true)?;
    Ok(scan)
}

/// Best-effort variant of [`scan`] for `run`: an unreadable manifest yields
/// an empty scan and leaves the failure to the package manager.
pub fn scan_best_effort(path: &Path, foundation: &Foundation) -> ManifestScan {
    scan(path, foundation).unwrap_or_default()
}

fn scan_file(
    path: &Path,
    foundation: &Foundation,
    scan: &mut ManifestScan,
    visited: &mut HashSet<PathBuf>,
    is_root: bool,
) -> Result<()> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return Ok(());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if is_root => {
            return if e.kind() == std::io::ErrorKind::NotFound {
                Err(manifest::not_found(path.display().to_string()))
            } else {
                Err(manifest::read_failed(path.display().to_string(), e.to_string()))
            };
        }
        Err(_) => return Ok(()),
    };

    let base = path.parent().unwrap_or_else(|| Path::new("."));

    for (idx, raw) in content.lines().enumerate() {
        if let Some(target) = include_target(raw) {
            let nested = base.join(target);
            scan_file(&nested, foundation, scan, visited, false)?;
            continue;
        }

        let Some((name, pin)) = parse_requirement_line(raw) else {
            continue;
        };

        if let (Some(version), Some(pinned)) = (&pin, foundation.find(&name)) {
            if *version != pinned.version {
                scan.conflicts.push(PinConflict {
                    package: pinned.name.clone(),
                    pinned_version: pinned.version.clone(),
                    manifest_version: version.clone(),
                    location: format!("{}:{}", path.display(), idx + 1),
                });
            }
        }

        scan.requirements.push(Requirement {
            name,
            pin,
            file: path.to_path_buf(),
            line: idx + 1,
        });
    }

    Ok(())
}

//! Check command implementation
//!
//! Read-only manifest lint: counts requirements and reports foundation
//! conflicts without ever invoking the installer. Conflicts are reported as
//! failures regardless of the override policy; check states facts.

use std::path::PathBuf;

use console::Style;

use crate::cli::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::manifest;
use crate::report::{self, CheckReport, ConflictEntry};
use crate::workspace;

/// Lint the manifest and return the process exit code (1 on conflicts)
pub fn run(workspace_flag: Option<PathBuf>, verbose: bool, args: CheckArgs) -> Result<i32> {
    let root = workspace::resolve_root(workspace_flag)?;
    let settings = Settings::load(&root)?;

    let manifest_rel = args.manifest.unwrap_or_else(|| settings.manifest());
    let manifest_path = workspace::resolve_manifest(&root, &manifest_rel);
    let foundation = settings.foundation();

    // Unlike `run`, a missing or unreadable manifest is an error here:
    // reading the file is this command's whole job.
    let scan = manifest::scan(&manifest_path, &foundation)?;

    let manifest_display = workspace::display_path(&manifest_path);

    if args.json {
        let report = CheckReport {
            manifest: manifest_display,
            requirements: scan.requirements.len(),
            conflicts: scan.conflicts.iter().map(ConflictEntry::from).collect(),
        };
        println!("{}", report::to_json(&report));
    } else {
        println!(
            "{} {} requirement(s) in {}",
            Style::new().bold().apply_to("Manifest:"),
            scan.requirements.len(),
            manifest_display
        );
        if verbose {
            for requirement in &scan.requirements {
                let location = format!("{}:{}", requirement.file.display(), requirement.line);
                match &requirement.pin {
                    Some(version) => println!(
                        "  {}=={}  {}",
                        requirement.name,
                        version,
                        Style::new().dim().apply_to(&location)
                    ),
                    None => println!(
                        "  {}  {}",
                        requirement.name,
                        Style::new().dim().apply_to(&location)
                    ),
                }
            }
        }

        if scan.conflicts.is_empty() {
            println!(
                "{} no foundation conflicts",
                Style::new().green().bold().apply_to("OK:")
            );
        } else {
            for conflict in &scan.conflicts {
                println!(
                    "{} {} pinned to {} by the foundation, {} by the manifest ({})",
                    Style::new().red().bold().apply_to("conflict:"),
                    Style::new().bold().apply_to(&conflict.package),
                    conflict.pinned_version,
                    conflict.manifest_version,
                    conflict.location
                );
            }
        }
    }

    Ok(i32::from(!scan.conflicts.is_empty()))
}

//! Run command implementation
//!
//! Resolves the workspace, merges CLI flags over the settings file, applies
//! the pin-conflict policy, then executes (or displays) the three-step plan.

use std::path::PathBuf;

use crate::cli::RunArgs;
use crate::config::{ConflictPolicy, Settings};
use crate::error::{Result, manifest as manifest_error};
use crate::manifest;
use crate::report::{self, RunReport};
use crate::sequence::{self, SequencePlan};
use crate::ui::{self, Ui};
use crate::workspace;

/// Run the bootstrap sequence and return the process exit code
pub fn run(workspace_flag: Option<PathBuf>, verbose: bool, args: RunArgs) -> Result<i32> {
    let root = workspace::resolve_root(workspace_flag)?;
    let settings = effective_settings(Settings::load(&root)?, &args);

    let foundation = settings.foundation();
    foundation.validate()?;

    let manifest_path = workspace::resolve_manifest(&root, &settings.manifest());

    // Best-effort conflict scan: an unreadable manifest skips the scan and
    // leaves the failure to the tool in step 3.
    let scan = manifest::scan_best_effort(&manifest_path, &foundation);
    let mut warnings = Vec::new();
    if !scan.conflicts.is_empty() {
        match settings.on_conflict {
            ConflictPolicy::Reject => {
                let conflict = &scan.conflicts[0];
                return Err(manifest_error::pin_conflict(
                    &conflict.package,
                    &conflict.pinned_version,
                    &conflict.manifest_version,
                    &conflict.location,
                ));
            }
            ConflictPolicy::Override => {
                for conflict in &scan.conflicts {
                    warnings.push(format!(
                        "manifest pins {}=={} over the foundation's {}=={} ({}); the manifest version wins",
                        conflict.package,
                        conflict.manifest_version,
                        conflict.package,
                        conflict.pinned_version,
                        conflict.location
                    ));
                }
            }
        }
    }

    let plan = SequencePlan::build(&settings, &foundation, &root);
    let workspace_display = workspace::display_path(&root);

    if args.dry_run {
        if args.json {
            let report = RunReport::planned(workspace_display, settings.strict, &plan);
            println!("{}", report::to_json(&report));
        } else {
            for warning in &warnings {
                ui::warn_line(warning);
            }
            ui::show_plan(&plan);
        }
        return Ok(0);
    }

    let ui = if args.json {
        Ui::silent()
    } else {
        Ui::new(false, verbose, plan.steps.len() as u64)
    };

    for warning in &warnings {
        ui.warn(warning);
    }
    if verbose {
        ui.note(&format!("workspace: {workspace_display}"));
        ui.note(&format!("manifest: {}", workspace::display_path(&manifest_path)));
        ui.note(&format!(
            "strict: {}, on_conflict: {:?}",
            settings.strict, settings.on_conflict
        ));
    }

    let outcome = sequence::execute(&plan, settings.strict, args.json, &ui);

    if args.json {
        let report = RunReport::executed(workspace_display, settings.strict, &outcome);
        println!("{}", report::to_json(&report));
    } else {
        ui.summary(&outcome);
    }

    Ok(outcome.exit_code)
}

/// Merge CLI flags over the loaded settings; flags win
fn effective_settings(mut settings: Settings, args: &RunArgs) -> Settings {
    if let Some(manifest) = &args.manifest {
        settings.manifest = Some(manifest.clone());
    }
    if let Some(program) = &args.installer {
        // The flag replaces the whole invocation; configured leading
        // arguments belong to the configured program.
        settings.installer.program = program.clone();
        settings.installer.args.clear();
    }
    if args.strict {
        settings.strict = true;
    }
    if args.allow_override {
        settings.on_conflict = ConflictPolicy::Override;
    }
    settings
}

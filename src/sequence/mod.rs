//! The three-step bootstrap sequence
//!
//! Planning builds the fixed step list from the effective settings;
//! execution runs it in order under the strict/non-strict policy. There is
//! no retry, reorder, skip, or rollback mechanism: the only state machine is
//! "not started, step 1 done, step 2 done, step 3 done".

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::config::Settings;
use crate::foundation::Foundation;
use crate::installer::InstallerCommand;
use crate::ui::Ui;

/// Identifies one of the three fixed steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepLabel {
    UpgradeInstaller,
    InstallPinnedFoundation,
    InstallManifestDependencies,
}

impl StepLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpgradeInstaller => "upgrade-installer",
            Self::InstallPinnedFoundation => "install-pinned-foundation",
            Self::InstallManifestDependencies => "install-manifest-dependencies",
        }
    }
}

impl std::fmt::Display for StepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planned invocation of the installer
#[derive(Debug, Clone)]
pub struct PlannedStep {
    pub label: StepLabel,
    /// Arguments after the installer's program and leading arguments
    pub args: Vec<String>,
    /// Full command line for display
    pub command: String,
}

/// The fixed three-step plan
#[derive(Debug, Clone)]
pub struct SequencePlan {
    pub installer: InstallerCommand,
    pub steps: Vec<PlannedStep>,
}

impl SequencePlan {
    /// Build the plan from effective settings. Step order is fixed:
    /// self-upgrade, pinned foundation, manifest. Every step runs from the
    /// workspace root so relative manifest paths resolve against it.
    pub fn build(settings: &Settings, foundation: &Foundation, root: &Path) -> Self {
        let installer = InstallerCommand::new(&settings.installer).with_current_dir(root);
        let manifest = settings.manifest();

        let specs = [
            (StepLabel::UpgradeInstaller, installer.upgrade_args()),
            (
                StepLabel::InstallPinnedFoundation,
                installer.foundation_args(foundation),
            ),
            (
                StepLabel::InstallManifestDependencies,
                installer.manifest_args(&manifest),
            ),
        ];

        let steps = specs
            .into_iter()
            .map(|(label, args)| PlannedStep {
                label,
                command: installer.command_line(&args),
                args,
            })
            .collect();

        Self { installer, steps }
    }
}

/// Outcome of one step
#[derive(Debug, Clone)]
pub struct StepReport {
    pub label: StepLabel,
    pub command: String,
    /// Exit code when the step ran, `None` when it was skipped
    pub exit_code: Option<i32>,
    pub skipped: bool,
    pub duration_ms: u64,
}

/// Outcome of the whole sequence
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub steps: Vec<StepReport>,
    /// The process exit code: the last executed step's code in non-strict
    /// mode, the first failure's code in strict mode
    pub exit_code: i32,
}

/// Run the plan to completion under the strict/non-strict policy.
///
/// Non-strict: every step is attempted and the final exit code equals the
/// last executed step's code, failures earlier in the sequence
/// notwithstanding. Strict: steps after the first failure are recorded as
/// skipped and the final exit code is the failing step's.
pub fn execute(plan: &SequencePlan, strict: bool, silence_stdout: bool, ui: &Ui) -> SequenceReport {
    let total = plan.steps.len();
    let mut steps = Vec::with_capacity(total);
    let mut exit_code = 0;
    let mut halted = false;

    for (index, step) in plan.steps.iter().enumerate() {
        if halted {
            ui.step_skipped(step);
            steps.push(StepReport {
                label: step.label,
                command: step.command.clone(),
                exit_code: None,
                skipped: true,
                duration_ms: 0,
            });
            continue;
        }

        ui.step_banner(index + 1, total, step);

        let started = Instant::now();
        let code = ui.suspend(|| plan.installer.run(&step.args, silence_stdout));
        let duration_ms = started.elapsed().as_millis() as u64;

        ui.step_result(step, code);
        steps.push(StepReport {
            label: step.label,
            command: step.command.clone(),
            exit_code: Some(code),
            skipped: false,
            duration_ms,
        });

        // Non-strict keeps the last executed step's code; strict latches
        // the first failure and skips the rest.
        exit_code = code;
        if strict && code != 0 {
            halted = true;
        }
    }

    ui.finish_steps();

    SequenceReport { steps, exit_code }
}

//! Machine-readable reports for `--json` mode
//!
//! The report replaces human-readable stdout; nothing here is ever
//! persisted by envstrap.

use serde::Serialize;

use crate::manifest::PinConflict;
use crate::sequence::{SequencePlan, SequenceReport, StepLabel};

/// One step in a run report
#[derive(Debug, Serialize)]
pub struct StepEntry {
    pub label: StepLabel,
    pub command: String,
    pub executed: bool,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Report document for `envstrap run --json`
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub workspace: String,
    pub strict: bool,
    pub dry_run: bool,
    pub steps: Vec<StepEntry>,
    pub exit_code: i32,
}

impl RunReport {
    /// Build a dry-run report: the plan with nothing executed
    pub fn planned(workspace: String, strict: bool, plan: &SequencePlan) -> Self {
        Self {
            workspace,
            strict,
            dry_run: true,
            steps: plan
                .steps
                .iter()
                .map(|step| StepEntry {
                    label: step.label,
                    command: step.command.clone(),
                    executed: false,
                    skipped: false,
                    exit_code: None,
                    duration_ms: None,
                })
                .collect(),
            exit_code: 0,
        }
    }

    /// Build an execution report from the sequence outcome
    pub fn executed(workspace: String, strict: bool, report: &SequenceReport) -> Self {
        Self {
            workspace,
            strict,
            dry_run: false,
            steps: report
                .steps
                .iter()
                .map(|step| StepEntry {
                    label: step.label,
                    command: step.command.clone(),
                    executed: !step.skipped,
                    skipped: step.skipped,
                    exit_code: step.exit_code,
                    duration_ms: (!step.skipped).then_some(step.duration_ms),
                })
                .collect(),
            exit_code: report.exit_code,
        }
    }
}

/// One conflict in a check report
#[derive(Debug, Serialize)]
pub struct ConflictEntry {
    pub package: String,
    pub pinned_version: String,
    pub manifest_version: String,
    pub location: String,
}

impl From<&PinConflict> for ConflictEntry {
    fn from(conflict: &PinConflict) -> Self {
        Self {
            package: conflict.package.clone(),
            pinned_version: conflict.pinned_version.clone(),
            manifest_version: conflict.manifest_version.clone(),
            location: conflict.location.clone(),
        }
    }
}

/// Report document for `envstrap check --json`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub manifest: String,
    pub requirements: usize,
    pub conflicts: Vec<ConflictEntry>,
}

/// Serialize a report to pretty JSON, falling back to an empty document on
/// the (unreachable) serialization failure of plain data structs
pub fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

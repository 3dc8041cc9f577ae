//! CLI surface tests using the REAL envstrap binary

mod common;

use common::envstrap_cmd;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    envstrap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequenced bootstrapper"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_run_help_lists_flags() {
    envstrap_cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--installer"))
        .stdout(predicate::str::contains("--allow-override"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_output() {
    envstrap_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envstrap"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    envstrap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envstrap"));
}

#[test]
fn test_completions_bash() {
    envstrap_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("envstrap"));
}

#[test]
fn test_completions_unknown_shell() {
    envstrap_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    envstrap_cmd().arg("bootstrap").assert().code(2);
}

#[test]
fn test_no_subcommand_is_a_usage_error() {
    envstrap_cmd().assert().code(2);
}

#[test]
fn test_missing_workspace_is_an_error() {
    envstrap_cmd()
        .args(["-w", "/no/such/envstrap/workspace", "run", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Workspace directory not found"));
}

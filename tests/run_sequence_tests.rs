//! Sequence execution tests driven by the scripted fake installer
//!
//! The fake installer records every invocation's arguments and exits with
//! the code scripted for that call, so these tests pin down the exact
//! commands, ordering, and exit-code contract of `envstrap run`.

#![cfg(unix)]

mod common;

use common::{TestWorkspace, envstrap_cmd};
use predicates::prelude::*;

fn run_with_fake(ws: &TestWorkspace, codes: &[i32]) -> assert_cmd::Command {
    let fake = ws.fake_installer(codes);
    let mut cmd = envstrap_cmd();
    cmd.args(["-w", ws.path.to_str().unwrap(), "run"])
        .args(["--installer", fake.to_str().unwrap()]);
    cmd
}

#[test]
fn test_happy_path_invokes_three_steps_in_order() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[]).assert().success();

    let calls = ws.fake_calls();
    assert_eq!(
        calls,
        vec![
            "install --upgrade pip",
            "install numpy==1.26.4 scipy==1.12.0 gensim==4.3.2",
            "install -r requirements.txt",
        ]
    );
}

#[test]
fn test_two_runs_produce_identical_invocations() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[]).assert().success();
    let first: Vec<String> = ws.fake_calls();

    run_with_fake(&ws, &[]).assert().success();
    let all = ws.fake_calls();

    assert_eq!(all.len(), 6);
    assert_eq!(&all[..3], first.as_slice());
    assert_eq!(&all[3..], first.as_slice());
}

#[test]
fn test_empty_manifest_still_runs_the_manifest_step() {
    // Scenario: an empty manifest is a no-op for the tool, not a skip
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "");

    run_with_fake(&ws, &[]).assert().success();

    let calls = ws.fake_calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2], "install -r requirements.txt");
}

#[test]
fn test_unpinned_manifest_entry_passes_through_untouched() {
    // The manifest is opaque: envstrap hands over the path, never rewrites
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "somepackage\n");

    run_with_fake(&ws, &[]).assert().success();

    let calls = ws.fake_calls();
    assert_eq!(calls[2], "install -r requirements.txt");
    assert_eq!(ws.read_file("requirements.txt"), "somepackage\n");
}

#[test]
fn test_missing_manifest_is_left_to_the_tool() {
    // run does not pre-validate the manifest; step 3 still runs
    let ws = TestWorkspace::new();

    run_with_fake(&ws, &[]).assert().success();

    assert_eq!(ws.fake_calls().len(), 3);
}

#[test]
fn test_strict_halts_at_the_failing_step() {
    // Scenario: pinned install fails under strict mode; the manifest step
    // is never attempted and the exit code matches the failing step's
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[0, 5, 0])
        .arg("--strict")
        .assert()
        .code(5);

    let calls = ws.fake_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].starts_with("install numpy=="));
}

#[test]
fn test_non_strict_continues_past_a_failing_step() {
    // Scenario: pinned install fails under default mode; the manifest step
    // still runs and the exit code reflects only its outcome
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[0, 5, 0]).assert().code(0);

    assert_eq!(ws.fake_calls().len(), 3);
}

#[test]
fn test_non_strict_exit_code_is_the_last_steps() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[0, 0, 7]).assert().code(7);

    assert_eq!(ws.fake_calls().len(), 3);
}

#[test]
fn test_non_strict_upgrade_failure_does_not_abort() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[3, 0, 0]).assert().code(0);

    assert_eq!(ws.fake_calls().len(), 3);
}

#[test]
fn test_strict_first_step_failure_skips_the_rest() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[9, 0, 0])
        .arg("--strict")
        .assert()
        .code(9)
        .stdout(predicate::str::contains("skipped"));

    assert_eq!(ws.fake_calls().len(), 1);
}

#[test]
fn test_spawn_failure_counts_as_exit_127_non_strict() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    envstrap_cmd()
        .args(["-w", ws.path.to_str().unwrap(), "run"])
        .args(["--installer", "/no/such/envstrap-installer"])
        .assert()
        .code(127);
}

#[test]
fn test_spawn_failure_halts_strict_mode_with_127() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    envstrap_cmd()
        .args(["-w", ws.path.to_str().unwrap(), "run", "--strict"])
        .args(["--installer", "/no/such/envstrap-installer"])
        .assert()
        .code(127)
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn test_failure_summary_names_the_exit_code() {
    let ws = TestWorkspace::new();
    ws.write_file("requirements.txt", "requests\n");

    run_with_fake(&ws, &[0, 0, 7])
        .assert()
        .code(7)
        .stdout(predicate::str::contains("exit code 7"));
}

#[test]
fn test_manifest_flag_changes_the_manifest_step() {
    let ws = TestWorkspace::new();
    ws.write_file("deps/extra.txt", "requests\n");

    run_with_fake(&ws, &[])
        .args(["--manifest", "deps/extra.txt"])
        .assert()
        .success();

    let calls = ws.fake_calls();
    assert_eq!(calls[2], "install -r deps/extra.txt");
}

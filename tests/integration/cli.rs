//! E2E tests for the `diagonal` binary.

#![cfg(test)]

use crate::common::*;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn default_run_prints_grid_and_waits() {
    // Arrange
    let mut cmd = diagonal_cmd();

    // Act
    let output = cmd.write_stdin("\n").assert().success().get_output().stdout.clone();

    // Assert
    let stdout = String::from_utf8(output).unwrap();

    let result_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("halt"))
        .collect();
    assert_eq!(result_lines.len(), 64);
    assert_eq!(result_lines[5 * 8 + 5], lines::SELF_REFERENCE_HALTS);
    assert_eq!(result_lines[2 * 8 + 2], lines::ASSESSOR_3_3);
    assert_eq!(result_lines[6 * 8 + 6], lines::ASSESSOR_7_7);
    assert!(stdout.contains("Press Enter to exit..."));
}

#[test]
fn end_of_input_counts_as_acknowledgement() {
    diagonal_cmd().write_stdin("").assert().success();
}

#[test]
fn no_wait_skips_the_prompt() {
    diagonal_cmd()
        .arg("--no-wait")
        .assert()
        .success()
        .stdout(contains("Press Enter").not());
}

#[test]
fn specialized_test_flag_changes_the_self_referential_line() {
    diagonal_cmd()
        .args(["--no-wait", "--specialized-test"])
        .assert()
        .success()
        .stdout(contains(lines::SELF_REFERENCE_DOES_NOT_HALT))
        .stdout(contains(lines::SELF_REFERENCE_HALTS).not());
}

#[test]
fn out_of_range_distinguished_index_fails_fast() {
    diagonal_cmd()
        .args(["--no-wait", "--grid-size", "4"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("halt").not())
        .stderr(contains("Configuration error: Distinguished index 6 is outside the registry range 1..=4"));
}

#[test]
fn summary_follows_the_grid() {
    diagonal_cmd()
        .args(["--no-wait", "--summary"])
        .assert()
        .success()
        .stdout(contains("64 cells assessed: 16 known never to halt, 48 not known"))
        .stdout(contains("Contradiction: the assessor halted on itself"));
}

/// The binary with colours left to the environment.
fn colored_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("diagonal");
    cmd.timeout(TIMEOUT_BASIC)
        .env_remove("RUST_LOG")
        .args(["--no-wait", "-n", "3", "-d", "3"]);
    cmd
}

#[test]
fn colors_are_applied_unless_disabled() {
    colored_cmd()
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout(contains("\x1b[32m"))
        .stdout(contains("\x1b[33m"));

    diagonal_cmd()
        .args(["--no-wait"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

#[test]
fn no_color_env_needs_a_value() {
    colored_cmd()
        .env("NO_COLOR", "")
        .assert()
        .success()
        .stdout(contains("\x1b[32m"));

    colored_cmd()
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

#[test]
fn unwritable_report_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("missing").join("report.json");

    diagonal_cmd()
        .args(["--no-wait", "-n", "1", "-d", "1", "--report"])
        .arg(&report)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Run report '"))
        .stderr(contains("report.json' unavailable"));
}

#[test]
fn audit_level_filters_entries() {
    let dir = tempfile::tempdir().unwrap();
    let audit = dir.path().join("audit.log");

    diagonal_cmd()
        .args(["--no-wait", "-n", "2", "-d", "1", "--audit-level", "info", "--audit"])
        .arg(&audit)
        .assert()
        .success();

    let audit_log = std::fs::read_to_string(&audit).unwrap();
    assert_eq!(audit_log.lines().count(), 3);
    assert!(!audit_log.contains("ASSESS"));

    diagonal_cmd()
        .args(["--no-wait", "--audit-level", "loud", "--audit"])
        .arg(&audit)
        .assert()
        .failure()
        .stderr(contains("unknown severity 'loud'"));
}

#[test]
fn report_and_audit_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    let audit = dir.path().join("audit.log");

    diagonal_cmd()
        .args(["--no-wait", "--grid-size", "3", "--distinguished-index", "2"])
        .arg("--report")
        .arg(&report)
        .arg("--audit")
        .arg(&audit)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["cells"].as_array().unwrap().len(), 9);
    assert_eq!(value["self_referential"][0]["computation_index"], 2);
    assert_eq!(value["contradiction"], false);

    let audit_log = std::fs::read_to_string(&audit).unwrap();
    assert_eq!(audit_log.lines().count(), 12);
    assert!(audit_log.contains("RUN_START"));
    assert!(audit_log.contains("CONFIG"));
    assert!(audit_log.contains("Computation_2(2) -> not known"));
}

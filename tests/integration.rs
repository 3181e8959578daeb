// Integration tests for the phonescore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output for the static sections.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary from an empty directory with no global config.
fn phonescore(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phonescore").expect("binary should exist");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phonescore"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Teen phone addiction"));
}

#[test]
fn cli_requires_a_section() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn overview_renders_dataset_metrics() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .arg("overview")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Teen Phone Addiction Analysis"))
        .stdout(predicate::str::contains("- **Teenagers Analyzed**: 3000"))
        .stdout(predicate::str::contains("Random Forest regression model"));
}

#[test]
fn analysis_json_lists_model_performance() {
    let home = TempDir::new().expect("temp dir should be created");
    let output = phonescore(&home)
        .args(["analysis", "--format", "json"])
        .output()
        .expect("analysis should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["title"], "Data Analysis & Insights");
    let sections = value["sections"].as_array().expect("sections should be an array");
    assert!(sections
        .iter()
        .any(|section| section["heading"] == "Model Performance"));
}

#[test]
fn about_text_carries_disclaimer() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .args(["about", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("About This Project"))
        .stdout(predicate::str::contains("should not be used for clinical"));
}

#[test]
fn unknown_format_is_rejected() {
    let home = TempDir::new().expect("temp dir should be created");
    phonescore(&home)
        .args(["overview", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

//! Black-box tests for the `mrpi` driver binary.
//!
//! Covers the command-line contract: one optional sample count,
//! a single result line on stdout, fatal errors on stderr.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_run_prints_an_estimate_near_pi() {
    // One million samples put the estimate within 3.1x with
    // overwhelming probability.
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("We estimate Pi to be: 3.1"));
}

#[test]
fn explicit_sample_count_is_accepted() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.arg("5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We estimate Pi to be: "));
}

#[test]
fn rejects_a_non_numeric_sample_count() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.arg("abc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn rejects_zero_samples() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.arg("0")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn rejects_a_negative_sample_count() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.arg("-5")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn rejects_an_unknown_engine() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.args(["1000", "--engine", "cluster"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No engine named"));
}

#[test]
fn seeded_runs_print_identical_estimates() {
    let run = || {
        let mut cmd = Command::cargo_bin("mrpi").unwrap();
        let assert = cmd.args(["100000", "--seed", "42"]).assert().success();
        assert.get_output().stdout.clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn threaded_engine_runs_to_completion() {
    let mut cmd = Command::cargo_bin("mrpi").unwrap();
    cmd.args(["200000", "--engine", "threaded", "--workers", "4", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We estimate Pi to be: "));
}

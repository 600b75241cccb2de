// Integration tests for the careerscope CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the careerscope binary.
fn careerscope() -> Command {
    Command::cargo_bin("careerscope").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    careerscope()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("careerscope"));
}

#[test]
fn cli_help_flag() {
    careerscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career recommendation"));
}

#[test]
fn recommend_requires_path() {
    careerscope()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn info_requires_career_name() {
    careerscope()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn subjects_lists_the_known_subjects() {
    careerscope()
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Computer Science"));
}

#[test]
fn interests_lists_the_known_interests() {
    careerscope()
        .arg("interests")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sports & Fitness"))
        .stdout(predicate::str::contains("Problem Solving"));
}

#[test]
fn careers_lists_the_catalog() {
    careerscope()
        .arg("careers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Medical Doctor"))
        .stdout(predicate::str::contains("$200,000 - $400,000"));
}

#[test]
fn careers_json_format_emits_display_fields() {
    careerscope()
        .args(["careers", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"average_salary\""))
        .stdout(predicate::str::contains("Environmental Science"));
}

#[test]
fn info_shows_extended_details_for_known_career() {
    careerscope()
        .args(["info", "Software Engineering"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Junior Developer"))
        .stdout(predicate::str::contains("Work environment:"));
}

#[test]
fn info_falls_back_for_unknown_career() {
    careerscope()
        .args(["info", "Astronaut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in the career catalog"))
        .stdout(predicate::str::contains("Varies by specific role and company"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("facevault").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Face enrollment and identification"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("facevault").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port").and(predicate::str::contains("memory")));
}

#[test]
fn test_reset_requires_confirmation() {
    let mut cmd = Command::cargo_bin("facevault").unwrap();
    cmd.arg("reset").assert().failure().stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_records_requires_person_id() {
    let mut cmd = Command::cargo_bin("facevault").unwrap();
    cmd.arg("records").assert().failure().stderr(predicate::str::contains("PERSON_ID"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn campus_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("campus"))
}

#[test]
fn test_help() {
    campus_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("students and departments"));
}

#[test]
fn test_version() {
    campus_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"));
}

#[test]
fn test_help_lists_port_flag() {
    campus_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--data"));
}

#[test]
fn test_invalid_port_rejected() {
    campus_cmd()
        .args(["--port", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

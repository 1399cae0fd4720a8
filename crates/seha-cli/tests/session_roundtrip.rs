use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_login_persists_session_record() {
    let dir = tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .args(["login", "--role", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dr. Ahmed Khaled"));

    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session_path).unwrap()).unwrap();
    assert_eq!(record["role"], "doctor");
    assert_eq!(record["name"], "Dr. Ahmed Khaled");
}

#[test]
fn test_whoami_reads_persisted_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .args(["login", "--role", "patient"])
        .assert()
        .success();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mohammed Qasem"))
        .stdout(predicate::str::contains("Patient"));
}

#[test]
fn test_whoami_without_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_logout_removes_session_record() {
    let dir = tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .args(["login", "--role", "patient"])
        .assert()
        .success();
    assert!(session_path.exists());

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    assert!(!session_path.exists());
}

#[test]
fn test_logout_without_session_is_a_noop() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_corrupt_session_record_is_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("session.json"), "{not json").unwrap();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_login_rejects_unknown_role() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("seha")
        .env("SEHA_HOME", dir.path())
        .args(["login", "--role", "admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}

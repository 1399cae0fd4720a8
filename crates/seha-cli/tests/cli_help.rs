use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("seha")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("whoami"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_login_help_shows_role() {
    cargo_bin_cmd!("seha")
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("patient"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("seha")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}

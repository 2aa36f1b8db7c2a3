use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_cakewalk_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("cakewalk")
}

#[test]
fn test_chrome_command_help() {
    let mut cmd = Command::new(get_cakewalk_bin());
    cmd.arg("chrome").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Locate the Chrome binary the suite would use",
        ))
        .stdout(predicate::str::contains("--chrome-path"));
}

#[test]
fn test_chrome_command_with_bogus_path() {
    let mut cmd = Command::new(get_cakewalk_bin());
    cmd.arg("chrome")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

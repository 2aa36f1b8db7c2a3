use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_cakewalk_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("cakewalk")
}

#[test]
fn test_list_shows_every_registered_check() {
    let mut cmd = Command::new(get_cakewalk_bin());
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4 registered checks"))
        .stdout(predicate::str::contains("main_page_user_sees_logo"))
        .stdout(predicate::str::contains("nav_bar_user_sees_a_list_of_items"))
        .stdout(predicate::str::contains(
            "user_wants_to_look_at_lesson_card_defichain",
        ))
        .stdout(predicate::str::contains("user_wants_to_browse_all_lessons"));
}

#[test]
fn test_list_shows_markers() {
    let mut cmd = Command::new(get_cakewalk_bin());
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sanity"))
        .stdout(predicate::str::contains("regression"));
}

#[test]
fn test_list_json_output() {
    let mut cmd = Command::new(get_cakewalk_bin());
    cmd.arg("list").arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["name"], "main_page_user_sees_logo");
    assert_eq!(entries[0]["marker"], "sanity");
}

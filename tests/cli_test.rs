use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn notekeep(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notekeep").unwrap();
    cmd.env("NOTEKEEP_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_list_and_search() {
    let home = TempDir::new().unwrap();

    notekeep(&home)
        .args(["add", "Groceries", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created (1): Groceries"));
    notekeep(&home)
        .args(["n", "Work", "Buy Milk later"])
        .assert()
        .success();
    notekeep(&home)
        .args(["add", "Errands", "post office"])
        .assert()
        .success();

    notekeep(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Errands"));

    notekeep(&home)
        .args(["search", "MILK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Work"))
        .stdout(predicate::str::contains("Errands").not())
        .stdout(predicate::str::contains("2 of 3 notes match"));
}

#[test]
fn test_duplicate_and_blank_notes_fail() {
    let home = TempDir::new().unwrap();
    notekeep(&home).args(["add", "A", "b"]).assert().success();

    notekeep(&home)
        .args(["add", " A ", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    notekeep(&home)
        .args(["add", "  ", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_edit_view_and_delete() {
    let home = TempDir::new().unwrap();
    notekeep(&home).args(["add", "A", "first"]).assert().success();
    notekeep(&home).args(["add", "B", "second"]).assert().success();

    notekeep(&home)
        .args(["edit", "2", "B", "changed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (2): B"));

    notekeep(&home)
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed"));

    notekeep(&home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (1): A"));

    notekeep(&home)
        .args(["view", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn test_corrupt_storage_then_reset() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("notes.json"), "garbage").unwrap();

    notekeep(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"))
        .stderr(predicate::str::contains("reset --yes"));

    notekeep(&home)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    notekeep(&home).args(["reset", "--yes"]).assert().success();

    notekeep(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_config_changes_time_format() {
    let home = TempDir::new().unwrap();
    notekeep(&home)
        .args(["config", "time-format", "%H:%M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time-format set to %H:%M"));

    notekeep(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time-format = %H:%M"))
        .stdout(predicate::str::contains("storage-key = notes"));

    notekeep(&home).args(["add", "T", "C"]).assert().success();
    let raw = std::fs::read_to_string(home.path().join("notes.json")).unwrap();
    assert!(!raw.contains("AM") && !raw.contains("PM"));
}

#[test]
fn test_unrenderable_time_format_in_config_fails_cleanly() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"time_format":"%Q"}"#).unwrap();

    notekeep(&home)
        .args(["add", "T", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format"))
        .stderr(predicate::str::contains("panicked").not());
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn test_config_rejects_unknown_key_and_bad_value() {
    let home = TempDir::new().unwrap();

    notekeep(&home)
        .args(["config", "colour"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: colour"));

    notekeep(&home)
        .args(["config", "time-format", "%Q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format"));
    assert!(!home.path().join("config.json").exists());
}

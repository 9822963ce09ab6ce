use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use tempfile::tempdir;

fn rpmdag() -> Command {
    Command::cargo_bin("rpmdag").unwrap()
}

#[test]
fn test_no_arguments_exits_one_with_usage() {
    rpmdag()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_too_many_arguments_exits_one() {
    rpmdag()
        .args(["a", "b", "c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    rpmdag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_directory_exits_one() {
    let dir = tempdir().unwrap();
    rpmdag()
        .arg(dir.path().join("gone"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_file_as_directory_exits_one() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    File::create(&file).unwrap();

    rpmdag()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_root_without_rpm_extension_exits_one() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("README.md");
    File::create(&readme).unwrap();

    rpmdag()
        .arg(dir.path())
        .arg(&readme)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not an .rpm archive"));
}

#[test]
fn test_missing_root_archive_exits_one() {
    let dir = tempdir().unwrap();
    rpmdag()
        .arg(dir.path())
        .arg(dir.path().join("gone.rpm"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn test_empty_directory() {
    // With rpm installed an empty repository is a successful, silent run;
    // without it the presence probe must fail the run up front.
    let rpm_present = std::process::Command::new("rpm")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    let dir = tempdir().unwrap();
    let assert = rpmdag().arg(dir.path()).assert();
    if rpm_present {
        assert.success().stdout(predicate::str::is_empty());
    } else {
        assert
            .code(1)
            .stderr(predicate::str::contains("rpm tool is not available"));
    }
}

//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xgit"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Download files or folders from Git repositories",
        ));
}

#[test]
fn test_no_subcommand_is_an_error() {
    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_download_requires_repository_argument() {
    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.arg("download").assert().failure();
}

#[test]
fn test_download_invalid_url_exits_with_input_error() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["download", "not-a-url"])
        .assert()
        .failure()
        .code(1) // Input error
        .stderr(predicate::str::contains("Unsupported repository URL"));
}

#[test]
fn test_submodule_remove_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["submodule", "remove", "vendor/lib"])
        .assert()
        .failure()
        .code(2) // Repository precondition error
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn test_submodule_list_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("xgit").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["submodule", "remove"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a git repository"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn prints_the_contents_of_an_existing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello from the demo\n").unwrap();

    Command::cargo_bin("outcome")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from the demo"));
}

#[test]
fn reports_the_failure_for_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("outcome")
        .unwrap()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn log_level_flag_is_accepted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"quiet").unwrap();

    Command::cargo_bin("outcome")
        .unwrap()
        .arg(file.path())
        .arg("--log-level")
        .arg("debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiet"));
}

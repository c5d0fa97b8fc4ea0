//! Integration tests for the uncontract CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_expand_sentence_argument() {
    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.arg("He's always worked hard");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("He has always worked hard"));
}

#[test]
fn test_expand_from_stdin() {
    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.write_stdin("I'd eaten early\nDon't stop\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("I had eaten early"))
        .stdout(predicate::str::contains("Do not stop"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.arg("-f").arg("json").arg("it's six o'clock");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"original\""))
        .stdout(predicate::str::contains("\"expanded\""))
        .stdout(predicate::str::contains("it is six of the clock"));
}

#[test]
fn test_expand_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("sentences.txt");
    fs::write(&input_file, "You'd finished\n\nwe can't wait\n").unwrap();

    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.arg("-i").arg(input_file.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("You had finished"))
        .stdout(predicate::str::contains("we cannot wait"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.arg("-i").arg("no-such-file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_empty_stdin_fails() {
    let mut cmd = Command::cargo_bin("uncontract").unwrap();
    cmd.write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No input provided"));
}

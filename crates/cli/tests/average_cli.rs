//! End-to-end runs of the `average` binary against a scratch directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn average(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_average"));
    cmd.current_dir(dir.path());
    cmd
}

/// Write `rc1.txt`..`rc10.txt`, empty unless listed.
fn write_series(dir: &TempDir, contents: &[(u32, &str)]) {
    for i in 1..=10 {
        let body = contents
            .iter()
            .find(|(n, _)| *n == i)
            .map_or("", |(_, body)| body);
        fs::write(dir.path().join(format!("rc{i}.txt")), body).unwrap();
    }
}

#[test]
fn two_runs_average_to_their_mean() {
    let dir = TempDir::new().unwrap();
    write_series(&dir, &[(1, "1 2.0\n"), (2, "1 4.0\n")]);

    average(&dir).assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(dir.path().join("rc.txt")).unwrap(), "1 3.0\n");
}

#[test]
fn rows_are_ascending_with_full_precision() {
    let dir = TempDir::new().unwrap();
    write_series(
        &dir,
        &[
            (1, "10 1\n2 0.1\n1 5\n"),
            (4, "2 0.2\n10 2\n"),
            (9, "10 2\nskip me please\n"),
        ],
    );

    average(&dir).assert().success();

    let out = fs::read_to_string(dir.path().join("rc.txt")).unwrap();
    assert_eq!(out, "1 5.0\n2 0.15000000000000002\n10 1.6666666666666667\n");
}

#[test]
fn carriage_return_only_runs_average() {
    let dir = TempDir::new().unwrap();
    write_series(&dir, &[(1, "1 2.0\r1 4.0\r"), (2, "2 0.1\r\n2 0.2\r\n")]);

    average(&dir).assert().success();

    let out = fs::read_to_string(dir.path().join("rc.txt")).unwrap();
    assert_eq!(out, "1 3.0\n2 0.15000000000000002\n");
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_series(&dir, &[(1, "1 2.0\n")]);
    fs::remove_file(dir.path().join("rc6.txt")).unwrap();

    average(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rc6.txt").and(predicate::str::contains("not found")));

    assert!(!dir.path().join("rc.txt").exists());
}

#[test]
fn non_numeric_value_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_series(&dir, &[(3, "1 2.0\n2 slow\n")]);

    average(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rc3.txt:2: invalid value 'slow'"));

    assert!(!dir.path().join("rc.txt").exists());
}

#[test]
fn output_flag_and_partial_range() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rc1.txt"), "7 1.0\n").unwrap();
    fs::write(dir.path().join("rc2.txt"), "7 2.0\n").unwrap();

    average(&dir)
        .args(["--last", "2", "-o", "merged.txt"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("merged.txt")).unwrap(), "7 1.5\n");
    assert!(!dir.path().join("rc.txt").exists());
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    write_series(&dir, &[(1, "1 1\n")]);

    average(&dir)
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("averaged 1 index(es) from 10 file(s)"));
}

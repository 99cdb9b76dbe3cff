//! Behavioral specs for the statistics-based policies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const STATISTICS: &str = r#"{
  "version": 1,
  "tests": {
    "A": { "runs": 1, "total_ms": 3000 },
    "B": { "runs": 2, "failures": 1, "last_failed": true, "total_ms": 2000 },
    "C": { "runs": 1, "consecutive_passes": 1, "total_ms": 1000 },
    "D": { "runs": 1, "consecutive_passes": 1, "total_ms": 1000 }
  }
}"#;

/// > Previously failing tests run first
#[test]
fn failed_first_puts_failures_first() {
    let temp = Project::empty();
    temp.file("stats.json", STATISTICS);
    let output = runorder_cmd()
        .args(["-p", "failedfirst", "--statistics-file", "stats.json", "A", "C", "B"])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("B"));
    assert_eq!(stdout.lines().count(), 3);
}

/// > Balanced ordering splits runtime across workers
#[test]
fn balanced_groups_by_runtime() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = "balanced"
statistics_file = "stats.json"
workers = 2
"#,
    );
    temp.file("stats.json", STATISTICS);
    runorder_cmd()
        .args(["D", "C", "B", "A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("A\nD\nC\nB\n");
}

/// > Corrupt statistics degrade to empty history with a warning
#[test]
fn corrupt_statistics_is_not_fatal() {
    let temp = Project::empty();
    temp.file("stats.json", "{ nope");
    runorder_cmd()
        .args(["-p", "failedfirst", "--statistics-file", "stats.json", "C", "A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("C\nA\n")
        .stderr(predicates::str::contains("invalid statistics file"));
}

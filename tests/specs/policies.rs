//! Behavioral specs for the policies listing and ordering policies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeSet;

use crate::prelude::*;

/// > `runorder policies` lists every canonical policy name
#[test]
fn policies_lists_all_names() {
    let mut assert = runorder_cmd().arg("policies").assert().success();
    for name in [
        "alphabetical",
        "reversealphabetical",
        "hourly",
        "random",
        "failedfirst",
        "balanced",
        "inputfile",
        "none",
    ] {
        assert = assert.stdout(predicates::str::contains(name));
    }
}

/// > Hourly ordering is one of the two name sorts
#[test]
fn hourly_is_alphabetical_or_reverse() {
    let temp = Project::empty();
    let output = runorder_cmd()
        .args(["--policy", "hourly", "pkg.B", "pkg.C", "pkg.A"])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout == "pkg.A\npkg.B\npkg.C\n" || stdout == "pkg.C\npkg.B\npkg.A\n",
        "{stdout}"
    );
}

/// > Random keeps every test exactly once
#[test]
fn random_keeps_every_test() {
    let temp = Project::empty();
    let output = runorder_cmd()
        .args(["--policy", "random", "a", "b", "c", "d", "a"])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    let set: BTreeSet<&str> = lines.into_iter().collect();
    assert_eq!(set, BTreeSet::from(["a", "b", "c", "d"]));
}

/// > Completions are generated for a shell
#[test]
fn completions_for_bash() {
    runorder_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("runorder"));
}

/// > Verbose mode prints a summary to stderr without changing stdout
#[test]
fn verbose_summary_on_stderr() {
    let temp = Project::empty();
    runorder_cmd()
        .args(["--verbose", "--policy", "alphabetical,random", "pkg.B", "pkg.A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("pkg.A\npkg.B\n")
        .stderr(
            predicates::str::contains("policy: alphabetical")
                .and(predicates::str::contains("ignored policies: random")),
        );
}

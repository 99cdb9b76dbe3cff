//! Behavioral specs for the inputfile policy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Only listed tests present in the input run, in file order
#[test]
fn listed_tests_only() {
    let temp = Project::empty();
    temp.file("order.txt", "B\nD\n");
    runorder_cmd()
        .args(["--policy", "inputfile", "--order-file", "order.txt", "A", "B", "C"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("B\n");
}

/// > File order replaces input order
#[test]
fn file_order_wins() {
    let temp = Project::empty();
    temp.file("order.txt", "C\r\nA\r\nB\r\n");
    runorder_cmd()
        .args(["--policy", "inputfile", "--order-file", "order.txt", "A", "B", "C"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("C\nA\nB\n");
}

/// > Order file path from config resolves against the config directory
#[test]
fn order_file_from_config() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = "inputfile"
order_file = "ci/order.txt"
"#,
    );
    temp.file("ci/order.txt", "pkg.B\npkg.A\n");
    temp.file("sub/.keep", "");
    runorder_cmd()
        .args(["pkg.A", "pkg.B"])
        .current_dir(temp.path().join("sub"))
        .assert()
        .success()
        .stdout("pkg.B\npkg.A\n");
}

/// > Missing order file degrades to an empty order, not a failure
#[test]
fn missing_order_file_is_not_fatal() {
    let temp = Project::empty();
    let output = runorder_cmd()
        .args(["--policy", "inputfile", "--order-file", "absent.txt", "-o", "json", "A", "B"])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tests"], serde_json::json!([]));
    assert_eq!(value["dropped"], 2);
    assert_eq!(value["diagnostics"][0]["kind"], "order_file_unreadable");
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read order file"));
}

//! Behavioral specs for configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Config policy applies when no flag overrides it
#[test]
fn config_policy_applies() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = "reversealphabetical"
"#,
    );
    runorder_cmd()
        .args(["pkg.A", "pkg.C", "pkg.B"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("pkg.C\npkg.B\npkg.A\n");
}

/// > Command line policy overrides config
#[test]
fn flag_overrides_config_policy() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = "reversealphabetical"
"#,
    );
    runorder_cmd()
        .args(["--policy", "alphabetical", "pkg.B", "pkg.A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("pkg.A\npkg.B\n");
}

/// > Config is discovered from a subdirectory
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = ["alphabetical", "random"]
"#,
    );
    temp.file("sub/dir/.keep", "");
    runorder_cmd()
        .args(["pkg.B", "pkg.A"])
        .current_dir(temp.path().join("sub/dir"))
        .assert()
        .success()
        .stdout("pkg.A\npkg.B\n");
}

/// > Explicit --config path is used
#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    temp.file(
        "conf/custom.toml",
        r#"version = 1

[order]
policy = "alphabetical"
"#,
    );
    runorder_cmd()
        .args(["-C", "conf/custom.toml", "pkg.B", "pkg.A"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("pkg.A\npkg.B\n");
}

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::with_config("version = 1\nunknown_key = true\n");
    runorder_cmd()
        .arg("--config-only")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unknown policy names in config are errors
#[test]
fn unknown_config_policy_fails() {
    let temp = Project::with_config(
        r#"version = 1

[order]
policy = "sideways"
"#,
    );
    runorder_cmd()
        .arg("--config-only")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown run order 'sideways'"));
}

/// > Valid config produces no errors
#[test]
fn valid_config_no_errors() {
    let temp = Project::with_config(MINIMAL_CONFIG);
    runorder_cmd()
        .arg("--config-only")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

/// > Unknown policy flag is a usage error
#[test]
fn unknown_policy_flag_fails() {
    let temp = Project::empty();
    runorder_cmd()
        .args(["--policy", "sideways", "pkg.A"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown run order"));
}

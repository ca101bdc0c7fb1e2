//! Argument parsing and usage errors

use crate::common::{run_newsdesk, write_config};
use std::process::Command;

#[test]
fn test_missing_config_argument_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_newsdesk")).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_version_includes_build_metadata() {
    let output = Command::new(env!("CARGO_BIN_EXE_newsdesk"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_sink_capacity_flag_supplies_missing_value() {
    let config = write_config("pipeline.conf", "1 4 2\n");

    let without = run_newsdesk(&config.path, &[]);
    assert_eq!(without.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&without.stderr).contains("--sink-capacity"));

    let with = run_newsdesk(&config.path, &["--sink-capacity", "2"]);
    assert!(with.status.success());
    assert_eq!(crate::common::rendered_items(&with).len(), 4);
}

#[test]
fn test_zero_sink_capacity_flag_is_rejected() {
    let config = write_config("pipeline.conf", "1 4 2\n3\n");

    let output = run_newsdesk(&config.path, &["--sink-capacity", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_seed_makes_runs_repeatable() {
    let config = write_config("pipeline.conf", "1 20 3\n2 20 3\n4\n");

    let mut first = crate::common::rendered_items(&run_newsdesk(&config.path, &["--seed", "7"]));
    let mut second = crate::common::rendered_items(&run_newsdesk(&config.path, &["--seed", "7"]));
    first.sort();
    second.sort();

    assert_eq!(first, second);
}

#[test]
fn test_quiet_run_keeps_stderr_empty() {
    let config = write_config("pipeline.conf", "1 3 2\n2\n");

    let output = run_newsdesk(&config.path, &["-q", "-q"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

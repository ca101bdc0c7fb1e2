//! Configuration file handling through the binary

use crate::common::{rendered_items, run_newsdesk, write_config};
use std::path::Path;

#[test]
fn test_missing_file_exits_with_error() {
    let output = run_newsdesk(Path::new("/nonexistent/newsdesk.conf"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot read configuration file"));
}

#[test]
fn test_zero_producer_capacity_exits_with_error() {
    let config = write_config("pipeline.conf", "1 3 2\n2 3 0\n2\n");

    let output = run_newsdesk(&config.path, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no item may be rendered");
    assert!(String::from_utf8_lossy(&output.stderr).contains("capacity must be at least 1"));
}

#[test]
fn test_zero_sink_capacity_in_file_exits_with_error() {
    let config = write_config("pipeline.conf", "1 3 2\n0\n");

    let output = run_newsdesk(&config.path, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_file_exits_with_error() {
    let config = write_config("pipeline.conf", "# nothing configured\n");

    let output = run_newsdesk(&config.path, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least one producer"));
}

#[test]
fn test_toml_configuration() {
    let config = write_config(
        "pipeline.toml",
        r#"
sink_capacity = 3
edit_delay_ms = 0

[[producer]]
id = 5
items = 4
capacity = 2

[[producer]]
id = 9
items = 2
capacity = 1
"#,
    );

    let output = run_newsdesk(&config.path, &[]);
    assert!(output.status.success());

    let items = rendered_items(&output);
    assert_eq!(items.iter().filter(|(id, _, _)| *id == 5).count(), 4);
    assert_eq!(items.iter().filter(|(id, _, _)| *id == 9).count(), 2);
}

#[test]
fn test_toml_unknown_key_exits_with_error() {
    let config = write_config(
        "pipeline.toml",
        "sink_capacity = 3\nsink_capcity = 4\n[[producer]]\nid = 1\nitems = 1\ncapacity = 1\n",
    );

    let output = run_newsdesk(&config.path, &[]);
    assert_eq!(output.status.code(), Some(1));
}

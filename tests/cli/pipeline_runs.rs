//! Output of complete pipeline runs

use crate::common::{rendered_items, run_newsdesk, stdout_lines, write_config};
use serial_test::serial;
use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

#[test]
fn test_two_producers_render_five_items() {
    let config = write_config("pipeline.conf", "1 3 2\n2 2 2\n2\n");

    let output = run_newsdesk(&config.path, &[]);
    assert!(output.status.success());

    let items = rendered_items(&output);
    assert_eq!(items.len(), 5);
    assert_eq!(items.iter().filter(|(id, _, _)| *id == 1).count(), 3);
    assert_eq!(items.iter().filter(|(id, _, _)| *id == 2).count(), 2);
}

#[test]
fn test_zero_items_renders_only_done() {
    let config = write_config("pipeline.conf", "1 0 2\n2\n");

    let output = run_newsdesk(&config.path, &[]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["DONE".to_string()]);
}

#[test]
fn test_indices_are_per_producer_and_category_sequences() {
    let config = write_config("pipeline.conf", "1 40 2\n2 40 3\n3 40 1\n1\n");

    let output = run_newsdesk(&config.path, &[]);
    assert!(output.status.success());

    let items = rendered_items(&output);
    assert_eq!(items.len(), 120);
    assert_eq!(items.iter().collect::<HashSet<_>>().len(), 120);

    let mut next: BTreeMap<(u32, String), u64> = BTreeMap::new();
    for (producer, category, index) in items {
        let expected = next.entry((producer, category.clone())).or_insert(0);
        assert_eq!(
            index, *expected,
            "producer {} {} out of order",
            producer, category
        );
        *expected += 1;
    }
}

// Timing-sensitive; run alone so parallel tests do not stretch the wall clock
#[test]
#[serial]
fn test_default_edit_delay_applies_per_item() {
    let config = write_config("pipeline.conf", "1 3 3\n3\n");

    let started = Instant::now();
    let output = run_newsdesk(&config.path, &["--edit-delay-ms", "100"]);

    assert!(output.status.success());
    assert_eq!(rendered_items(&output).len(), 3);
    // Items of one category are edited one after another
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[test]
#[serial]
fn test_log_file_receives_records() {
    let config = write_config("pipeline.conf", "1 2 2\n2\n");
    let log_dir = tempfile::tempdir().unwrap();
    let log_path = log_dir.path().join("newsdesk.log");

    let output = run_newsdesk(
        &config.path,
        &["--log-level", "info", "--log-file", log_path.to_str().unwrap()],
    );

    assert!(output.status.success());
    let written: Vec<_> = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    assert!(!written.is_empty(), "expected a log file in {:?}", log_dir.path());
}

//! Common test utilities for driving the binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A configuration file that lives as long as its temporary directory
pub struct ConfigFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_config(file_name: &str, contents: &str) -> ConfigFixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    std::fs::write(&path, contents).unwrap();
    ConfigFixture { _dir: dir, path }
}

/// Run the binary with `config` followed by `extra` arguments
///
/// Editing delay is switched off unless the caller passes its own.
pub fn run_newsdesk(config: &Path, extra: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_newsdesk"));
    command.arg(config);
    if !extra.iter().any(|arg| *arg == "--edit-delay-ms") {
        command.args(["--edit-delay-ms", "0"]);
    }
    command.args(extra).output().unwrap()
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// (producer id, category, index) for every item line; asserts the final line is DONE
pub fn rendered_items(output: &Output) -> Vec<(u32, String, u64)> {
    let lines = stdout_lines(output);
    let (terminal, items) = lines.split_last().expect("no output");
    assert_eq!(terminal, "DONE");

    items
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(' ').collect();
            assert_eq!(fields.len(), 4, "unexpected line '{}'", line);
            assert_eq!(fields[0], "Producer");
            (
                fields[1].parse().unwrap(),
                fields[2].to_string(),
                fields[3].parse().unwrap(),
            )
        })
        .collect()
}

//! Shared helpers for pipeline tests

use crate::pipeline::{run_pipeline, PipelineConfig, PipelineReport, ProducerConfig};
use crate::queue::Category;
use std::time::Duration;
use strum::IntoEnumIterator;

/// One parsed `Producer <id> <CATEGORY> <index>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rendered {
    pub producer_id: u32,
    pub category: Category,
    pub index: u64,
}

pub fn config(producers: &[(u32, u64, usize)], sink_capacity: usize) -> PipelineConfig {
    let producers = producers
        .iter()
        .map(|&(id, items, capacity)| ProducerConfig::new(id, items, capacity))
        .collect();
    PipelineConfig::new(producers, sink_capacity)
        .unwrap()
        .with_edit_delay(Duration::ZERO)
        .with_seed(2023)
}

/// Run the pipeline and return the report plus the rendered lines
pub fn run(config: &PipelineConfig) -> (PipelineReport, Vec<String>) {
    let mut out = Vec::new();
    let report = run_pipeline(config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (report, text.lines().map(str::to_string).collect())
}

/// Split output into item lines and check it ends with exactly one terminal line
pub fn parse_output(lines: &[String]) -> Vec<Rendered> {
    let (terminal, items) = lines.split_last().expect("output must not be empty");
    assert_eq!(terminal, "DONE");

    items
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(' ').collect();
            assert_eq!(fields.len(), 4, "unexpected line '{}'", line);
            assert_eq!(fields[0], "Producer");
            let category = Category::iter()
                .find(|category| category.name() == fields[2])
                .unwrap_or_else(|| panic!("unknown category in '{}'", line));
            Rendered {
                producer_id: fields[1].parse().unwrap(),
                category,
                index: fields[3].parse().unwrap(),
            }
        })
        .collect()
}

//! Pipeline configuration loading and validation
//!
//! Two file formats are accepted:
//!
//! - Plain text (default): whitespace-separated non-negative integers, read as
//!   `producer_id item_count queue_capacity` triples followed by one trailing
//!   integer, the sink queue capacity. `#` starts a comment.
//! - TOML, selected by a `.toml` extension:
//!
//! ```toml
//! sink_capacity = 5
//! edit_delay_ms = 100
//!
//! [[producer]]
//! id = 1
//! items = 30
//! capacity = 5
//! ```
//!
//! Values given on the command line override the file.

use crate::core::validation::{validate_capacity, validate_non_negative_int};
use crate::pipeline::error::{PipelineError, PipelineResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Simulated editing time per item when nothing else is configured
pub const DEFAULT_EDIT_DELAY: Duration = Duration::from_millis(100);

/// One producer and the capacity of its private queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProducerConfig {
    pub id: u32,
    #[serde(rename = "items")]
    pub item_count: u64,
    #[serde(rename = "capacity")]
    pub queue_capacity: usize,
}

impl ProducerConfig {
    pub fn new(id: u32, item_count: u64, queue_capacity: usize) -> Self {
        Self {
            id,
            item_count,
            queue_capacity,
        }
    }
}

/// Settings taken from the command line that win over the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub sink_capacity: Option<usize>,
    pub edit_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

/// Configuration as read from a file, before overrides and validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default, rename = "producer")]
    pub producers: Vec<ProducerConfig>,
    pub sink_capacity: Option<usize>,
    pub edit_delay_ms: Option<u64>,
}

impl RawConfig {
    /// Parse the plain integer format
    pub fn parse_plain(text: &str) -> PipelineResult<Self> {
        let tokens: Vec<&str> = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace)
            .collect();

        let mut values = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let value = validate_non_negative_int(token).map_err(|e| {
                PipelineError::config(format!("Value {} in configuration: {}", position + 1, e))
            })?;
            values.push(value);
        }

        let mut triples = values.chunks_exact(3);
        let mut producers = Vec::with_capacity(values.len() / 3);
        for triple in triples.by_ref() {
            let id = u32::try_from(triple[0]).map_err(|_| {
                PipelineError::config(format!("Producer id {} is out of range", triple[0]))
            })?;
            producers.push(ProducerConfig::new(id, triple[1], to_capacity(triple[2])?));
        }

        let sink_capacity = match triples.remainder() {
            [] => None,
            [sink] => Some(to_capacity(*sink)?),
            partial => {
                return Err(PipelineError::config(format!(
                    "Malformed producer entry: expected 3 integers, found {} at end of configuration",
                    partial.len()
                )))
            }
        };

        Ok(Self {
            producers,
            sink_capacity,
            edit_delay_ms: None,
        })
    }

    /// Parse the TOML format
    pub fn parse_toml(text: &str) -> PipelineResult<Self> {
        toml::from_str(text)
            .map_err(|e| PipelineError::config(format!("Invalid TOML configuration: {}", e)))
    }
}

fn to_capacity(value: u64) -> PipelineResult<usize> {
    usize::try_from(value)
        .map_err(|_| PipelineError::config(format!("Queue capacity {} is out of range", value)))
}

/// Validated configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub producers: Vec<ProducerConfig>,
    pub sink_capacity: usize,
    pub edit_delay: Duration,
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Build a config directly, validating it the same way as a loaded file
    pub fn new(producers: Vec<ProducerConfig>, sink_capacity: usize) -> PipelineResult<Self> {
        Self::from_raw(
            RawConfig {
                producers,
                sink_capacity: Some(sink_capacity),
                edit_delay_ms: None,
            },
            ConfigOverrides::default(),
        )
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path, overrides: ConfigOverrides) -> PipelineResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::config(format!(
                "Cannot read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let raw = if is_toml {
            RawConfig::parse_toml(&contents)?
        } else {
            RawConfig::parse_plain(&contents)?
        };
        log::debug!(
            "Loaded {} producer entries from {}",
            raw.producers.len(),
            path.display()
        );

        Self::from_raw(raw, overrides)
    }

    /// Apply overrides and validate
    pub fn from_raw(raw: RawConfig, overrides: ConfigOverrides) -> PipelineResult<Self> {
        if raw.producers.is_empty() {
            return Err(PipelineError::config(
                "Configuration must define at least one producer",
            ));
        }

        let mut seen = HashSet::new();
        for producer in &raw.producers {
            validate_capacity(&format!("Producer {}", producer.id), producer.queue_capacity)
                .map_err(PipelineError::config)?;
            if !seen.insert(producer.id) {
                log::warn!(
                    "Producer id {} appears more than once; rendered lines will not tell them apart",
                    producer.id
                );
            }
        }

        let sink_capacity = overrides
            .sink_capacity
            .or(raw.sink_capacity)
            .ok_or_else(|| {
                PipelineError::config(
                    "Missing sink queue capacity: add a trailing integer to the configuration or pass --sink-capacity",
                )
            })?;
        validate_capacity("Sink", sink_capacity).map_err(PipelineError::config)?;

        let edit_delay = overrides
            .edit_delay_ms
            .or(raw.edit_delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_EDIT_DELAY);

        Ok(Self {
            producers: raw.producers,
            sink_capacity,
            edit_delay,
            seed: overrides.seed,
        })
    }

    pub fn with_edit_delay(mut self, edit_delay: Duration) -> Self {
        self.edit_delay = edit_delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of items all producers will generate
    pub fn total_items(&self) -> u64 {
        self.producers.iter().map(|p| p.item_count).sum()
    }
}

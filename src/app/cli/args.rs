//! Command-line arguments
//!
//! The configuration file carries the pipeline topology; everything here
//! either overrides a file setting or controls logging.

use crate::core::validation::{validate_non_negative_int, validate_positive_int};
use crate::core::version::long_version;
use crate::pipeline::ConfigOverrides;
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "newsdesk")]
#[command(about = "Concurrent news publishing pipeline")]
#[command(version, long_version = long_version())]
#[command(after_help = "Plain-text configuration: `producer_id items capacity` triples \
followed by the sink queue capacity. Files ending in .toml are read as TOML.")]
pub struct Args {
    /// Pipeline configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Sink queue capacity (overrides the configuration file)
    #[arg(short = 's', long = "sink-capacity", value_name = "N", value_parser = validate_positive_int)]
    pub sink_capacity: Option<usize>,

    /// Simulated editing time per item in milliseconds [default: 100]
    #[arg(short = 'd', long = "edit-delay-ms", value_name = "MS", value_parser = validate_non_negative_int)]
    pub edit_delay_ms: Option<u64>,

    /// Seed for category selection; runs with the same seed produce the same items
    #[arg(long = "seed", value_name = "SEED", value_parser = validate_non_negative_int)]
    pub seed: Option<u64>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Write log records to this file instead of stderr
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            sink_capacity: self.sink_capacity,
            edit_delay_ms: self.edit_delay_ms,
            seed: self.seed,
        }
    }

    /// Net verbosity: `-v` counts up, `-q` counts down
    pub fn verbosity(&self) -> i8 {
        let verbose = self.verbose.min(i8::MAX as u8) as i8;
        let quiet = self.quiet.min(i8::MAX as u8) as i8;
        verbose - quiet
    }

    /// Explicit flags win; otherwise color only when stderr is a terminal
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::io::stderr().is_terminal()
        }
    }
}

//! CLI Integration Test Modules

pub mod argument_parsing;
pub mod config_files;
pub mod pipeline_runs;

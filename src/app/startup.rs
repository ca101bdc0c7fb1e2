//! Process startup: arguments, logging, configuration, then the pipeline run

use super::cli::Args;
use crate::core::error_handling::exit_with_error;
use crate::core::logging::{init_logging, resolve_level};
use crate::pipeline::{run_pipeline, PipelineConfig};
use clap::Parser;

/// Run the application; exits the process with status 1 on any fatal error
pub fn startup() {
    let args = Args::parse();

    let log_level = resolve_level(args.log_level.as_deref(), args.verbosity());
    if let Err(e) = init_logging(
        log_level,
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        args.use_color(),
    ) {
        eprintln!("Error: cannot initialise logging: {}", e);
        std::process::exit(1);
    }

    log::info!("newsdesk {} starting", env!("CARGO_PKG_VERSION"));
    log::debug!("Arguments: {:?}", args);

    let config = match PipelineConfig::load(&args.config, args.overrides()) {
        Ok(config) => config,
        Err(e) => exit_with_error(&e, "Loading configuration"),
    };
    log::debug!("Configuration: {:?}", config);

    let mut out = std::io::stdout();
    match run_pipeline(&config, &mut out) {
        Ok(report) => log::info!(
            "Finished in state {}: {} produced, {} forwarded",
            report.final_state,
            report.total_produced(),
            report.total_forwarded()
        ),
        Err(e) => exit_with_error(&e, "Starting pipeline"),
    }
}

//! Generic error handling utilities
//!
//! Fatal errors are reported the same way wherever they surface: a single
//! `FATAL:` line at error level, with the full error chain only at debug level.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the error carries a message the user can act on directly
    /// (a bad configuration file, an invalid capacity).
    fn is_user_actionable(&self) -> bool;

    /// The message to show the user for user-actionable errors
    fn user_message(&self) -> Option<&str>;
}

/// Log a fatal error with a level of detail that depends on who can fix it
///
/// # Examples
/// ```rust,no_run
/// # use newsdesk::core::error_handling::log_error_with_context;
/// # use newsdesk::pipeline::PipelineError;
/// let err = PipelineError::Config {
///     message: "Producer 3 queue capacity must be at least 1".to_string(),
/// };
/// log_error_with_context(&err, "Loading configuration");
/// // Logs: "FATAL: Producer 3 queue capacity must be at least 1"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}: {}", operation_context, error),
    }
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Report a fatal error and terminate the process with status 1
///
/// When error-level logging is off the summary still reaches stderr.
pub fn exit_with_error<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) -> ! {
    log_error_with_context(error, operation_context);
    if !log::log_enabled!(log::Level::Error) {
        eprintln!("{}", fatal_summary(error, operation_context));
    }
    std::process::exit(1)
}

/// Single line shown on stderr when logging is switched off or not yet running
pub fn fatal_summary<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("Error: {}", user_msg),
        _ => format!("Error: {}: {}", operation_context, error),
    }
}

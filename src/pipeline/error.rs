//! Pipeline Error Types
//!
//! Every variant is fatal. `Config` is raised before any thread starts; the
//! others abort the process from wherever they occur.

use crate::core::error_handling::ContextualError;
use crate::queue::QueueError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Resource error: {message}")]
    Resource { message: String },

    #[error("Queue failure in {stage}: {source}")]
    Queue {
        stage: String,
        #[source]
        source: QueueError,
    },

    #[error("Invariant violated in {stage}: {message}")]
    Invariant { stage: String, message: String },

    #[error("Output error: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn config(message: impl Into<String>) -> Self {
        PipelineError::Config {
            message: message.into(),
        }
    }

    pub fn invariant(stage: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Invariant {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

impl ContextualError for PipelineError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, PipelineError::Config { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            PipelineError::Config { message } => Some(message),
            _ => None,
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Attach the failing stage to a queue error
pub trait StageContext<T> {
    fn in_stage(self, stage: &str) -> PipelineResult<T>;
}

impl<T> StageContext<T> for Result<T, QueueError> {
    fn in_stage(self, stage: &str) -> PipelineResult<T> {
        self.map_err(|source| PipelineError::Queue {
            stage: stage.to_string(),
            source,
        })
    }
}

//! Queue Error Types

use crate::core::sync::SyncError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Queue capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    #[error(transparent)]
    Synchronisation(#[from] SyncError),

    #[error("Queue invariant violated: {message}")]
    Invariant { message: String },
}

impl QueueError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        QueueError::Invariant {
            message: message.into(),
        }
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

//! Pipeline-wide lifecycle state

use crate::core::sync::{handle_mutex_poison, SyncError};
use crate::pipeline::error::{PipelineError, PipelineResult};
use std::fmt;
use std::sync::Mutex;

/// Lifecycle of a pipeline run; only moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineState {
    /// Producers, dispatcher and editors active
    Running,
    /// Producers done; dispatcher flushing and propagating `Done`
    Draining,
    /// Editors flushing their last items and forwarding `Done`
    Finalizing,
    /// Sink has seen `Done` from every editor
    Done,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct StateTracker {
    state: Mutex<PipelineState>,
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PipelineState::Running),
        }
    }

    pub fn current(&self) -> PipelineResult<PipelineState> {
        let state = handle_mutex_poison(self.state.lock(), SyncError::poisoned)
            .map_err(|e| PipelineError::invariant("state tracker", e.to_string()))?;
        Ok(*state)
    }

    /// Move to `next`; moving backwards is an error, repeating a state is a no-op
    pub fn advance(&self, next: PipelineState) -> PipelineResult<()> {
        let mut state = handle_mutex_poison(self.state.lock(), SyncError::poisoned)
            .map_err(|e| PipelineError::invariant("state tracker", e.to_string()))?;
        if next < *state {
            return Err(PipelineError::invariant(
                "state tracker",
                format!("cannot move from {} back to {}", *state, next),
            ));
        }
        if next != *state {
            log::debug!("Pipeline state {} -> {}", *state, next);
            *state = next;
        }
        Ok(())
    }
}

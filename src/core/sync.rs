//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning in a consistent
//! manner across the codebase, plus the counting [`Semaphore`] the queues use
//! to park writers on a full queue and readers on an empty one.

use std::sync::{Condvar, LockResult, Mutex};

/// Error raised when a lock or condition variable is poisoned
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("{message}")]
    Poisoned { message: String },
}

impl SyncError {
    pub fn poisoned(message: String) -> Self {
        SyncError::Poisoned { message }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Handle poisoned mutex cases with consistent error handling
///
/// This utility function converts mutex poison errors into application-specific
/// errors using a provided error constructor. A poisoned lock means a thread
/// panicked while holding it, so the protected state can no longer be trusted.
///
/// # Arguments
/// * `result` - The result from a mutex lock (or condvar wait) operation
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use newsdesk::core::sync::{handle_mutex_poison, SyncError};
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(mutex.lock(), SyncError::poisoned).unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}

/// Counting semaphore built on a mutex-protected permit count and a condvar
///
/// `acquire` parks the calling thread until a permit is available; `release`
/// hands one permit back and wakes a single waiter. There is no upper bound on
/// the permit count, callers own the accounting.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<usize>,
    signal: Condvar,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            signal: Condvar::new(),
        }
    }

    /// Take one permit, blocking while none are available
    pub fn acquire(&self) -> SyncResult<()> {
        let mut permits = handle_mutex_poison(self.permits.lock(), SyncError::poisoned)?;
        while *permits == 0 {
            permits = handle_mutex_poison(self.signal.wait(permits), SyncError::poisoned)?;
        }
        *permits -= 1;
        Ok(())
    }

    /// Take one permit if one is available right now
    pub fn try_acquire(&self) -> SyncResult<bool> {
        let mut permits = handle_mutex_poison(self.permits.lock(), SyncError::poisoned)?;
        if *permits == 0 {
            return Ok(false);
        }
        *permits -= 1;
        Ok(true)
    }

    /// Return one permit and wake a waiter
    pub fn release(&self) -> SyncResult<()> {
        let mut permits = handle_mutex_poison(self.permits.lock(), SyncError::poisoned)?;
        *permits += 1;
        self.signal.notify_one();
        Ok(())
    }

    /// Current number of available permits
    #[cfg(test)]
    pub(crate) fn available(&self) -> SyncResult<usize> {
        let permits = handle_mutex_poison(self.permits.lock(), SyncError::poisoned)?;
        Ok(*permits)
    }
}

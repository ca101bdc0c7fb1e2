//! Unbounded linked queue
//!
//! Messages live in an owned node chain until dequeued; the `available`
//! semaphore always equals the number of linked nodes once an enqueue has
//! returned.

use crate::core::sync::{handle_mutex_poison, Semaphore, SyncError};
use crate::queue::error::{QueueError, QueueResult};
use std::collections::LinkedList;
use std::sync::Mutex;

/// Growable FIFO queue with blocking dequeue
///
/// Safe for many writers. The pipeline gives each instance a single reader,
/// but nothing breaks with more.
#[derive(Debug)]
pub struct UnboundedQueue<T> {
    chain: Mutex<LinkedList<T>>,
    available: Semaphore,
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnboundedQueue<T> {
    pub fn new() -> Self {
        Self {
            chain: Mutex::new(LinkedList::new()),
            available: Semaphore::new(0),
        }
    }

    pub fn len(&self) -> QueueResult<usize> {
        let chain = handle_mutex_poison(self.chain.lock(), SyncError::poisoned)?;
        Ok(chain.len())
    }

    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Append `value` at the tail; never blocks
    pub fn enqueue(&self, value: T) -> QueueResult<()> {
        {
            let mut chain = handle_mutex_poison(self.chain.lock(), SyncError::poisoned)?;
            chain.push_back(value);
        }
        self.available.release()?;
        Ok(())
    }

    /// Remove the head message, blocking until one is available
    pub fn dequeue_blocking(&self) -> QueueResult<T> {
        self.available.acquire()?;
        let mut chain = handle_mutex_poison(self.chain.lock(), SyncError::poisoned)?;
        chain
            .pop_front()
            .ok_or_else(|| QueueError::invariant("available permit taken but node chain is empty"))
    }
}

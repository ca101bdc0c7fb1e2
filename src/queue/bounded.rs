//! Fixed-capacity circular queue
//!
//! Slot accounting lives in two counting semaphores: `slots_free` starts at
//! `capacity` and gates writers, `slots_filled` starts at 0 and gates readers.
//! The ring indices are only touched while holding the ring mutex, and a slot
//! is only written after a `slots_free` permit was taken for it, so the queue
//! never holds more than `capacity` messages.

use crate::core::sync::{handle_mutex_poison, Semaphore, SyncError};
use crate::queue::error::{QueueError, QueueResult};
use std::sync::Mutex;

#[derive(Debug)]
struct Ring<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Ring<T> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    fn push(&mut self, value: T) -> QueueResult<()> {
        let capacity = self.slots.len();
        let slot = &mut self.slots[self.tail];
        if slot.is_some() {
            return Err(QueueError::invariant(format!(
                "write into occupied slot {} of a {}-slot ring",
                self.tail, capacity
            )));
        }
        *slot = Some(value);
        self.tail = (self.tail + 1) % capacity;
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> QueueResult<T> {
        let capacity = self.slots.len();
        let value = self.slots[self.head].take().ok_or_else(|| {
            QueueError::invariant(format!(
                "read from empty slot {} of a {}-slot ring",
                self.head, capacity
            ))
        })?;
        self.head = (self.head + 1) % capacity;
        self.len -= 1;
        Ok(value)
    }
}

/// Bounded FIFO queue safe for any number of writers and readers
#[derive(Debug)]
pub struct BoundedQueue<T> {
    ring: Mutex<Ring<T>>,
    slots_free: Semaphore,
    slots_filled: Semaphore,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` messages
    pub fn new(capacity: usize) -> QueueResult<Self> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity { capacity });
        }
        Ok(Self {
            ring: Mutex::new(Ring::with_capacity(capacity)),
            slots_free: Semaphore::new(capacity),
            slots_filled: Semaphore::new(0),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of messages currently linked into the ring
    pub fn len(&self) -> QueueResult<usize> {
        let ring = handle_mutex_poison(self.ring.lock(), SyncError::poisoned)?;
        Ok(ring.len)
    }

    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Append `value`, blocking while the queue is full
    pub fn enqueue_blocking(&self, value: T) -> QueueResult<()> {
        self.slots_free.acquire()?;
        {
            let mut ring = handle_mutex_poison(self.ring.lock(), SyncError::poisoned)?;
            ring.push(value)?;
        }
        self.slots_filled.release()?;
        Ok(())
    }

    /// Remove the oldest message, blocking while the queue is empty
    pub fn dequeue_blocking(&self) -> QueueResult<T> {
        self.slots_filled.acquire()?;
        self.take_filled_slot()
    }

    /// Remove the oldest message if there is one, without blocking
    pub fn dequeue_nonblocking(&self) -> QueueResult<Option<T>> {
        if !self.slots_filled.try_acquire()? {
            return Ok(None);
        }
        self.take_filled_slot().map(Some)
    }

    // Caller must already hold a `slots_filled` permit
    fn take_filled_slot(&self) -> QueueResult<T> {
        let value = {
            let mut ring = handle_mutex_poison(self.ring.lock(), SyncError::poisoned)?;
            ring.pop()?
        };
        self.slots_free.release()?;
        Ok(value)
    }
}

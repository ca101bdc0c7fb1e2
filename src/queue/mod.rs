//! Pipeline queue primitives
//!
//! Two FIFO queues connect the pipeline stages:
//!
//! - [`BoundedQueue`]: fixed-capacity ring with blocking enqueue, blocking
//!   dequeue and non-blocking dequeue. Used for each producer's private queue
//!   and for the shared sink queue.
//! - [`UnboundedQueue`]: growable node chain with non-blocking enqueue and
//!   blocking dequeue. Used for the per-category editor queues.
//!
//! Both serialize their internal state behind a private mutex and park
//! waiting threads on counting semaphores rather than polling. Dequeue moves
//! the value out to the caller; nothing is shared between queue and reader.
//!
//! ```text
//! Producer ─▶ BoundedQueue ─┐
//! Producer ─▶ BoundedQueue ─┼─▶ Dispatcher ─▶ UnboundedQueue × 3 ─▶ Editors ─▶ BoundedQueue ─▶ Sink
//! Producer ─▶ BoundedQueue ─┘
//! ```

mod bounded;
mod error;
mod message;
mod unbounded;

pub use bounded::BoundedQueue;
pub use error::{QueueError, QueueResult};
pub use message::{Category, Item, Message};
pub use unbounded::UnboundedQueue;

#[cfg(test)]
mod tests;

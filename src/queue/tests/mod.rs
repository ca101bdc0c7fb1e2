//! Test modules for the queue primitives
//!
//! Single-threaded behaviour is covered next to each queue; these suites
//! exercise the queues from several threads at once.

mod blocking;

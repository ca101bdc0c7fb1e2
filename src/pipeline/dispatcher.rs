//! Dispatcher stage: round-robin fan-in from producer queues, fan-out by category
//!
//! The cursor advances after every poll, hit or miss, so a busy producer
//! queue cannot starve its neighbours. Polling never blocks; after a full
//! sweep without a hit the thread yields before sweeping again. The yield
//! only delays the next poll: the cursor still moves on every poll, so
//! round-robin order and FIFO order within each source are unchanged.

use crate::pipeline::error::{PipelineResult, StageContext};
use crate::queue::{BoundedQueue, Category, Message, UnboundedQueue};

const STAGE: &str = "dispatcher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherReport {
    /// `Done` messages received, one per producer
    pub sentinels_received: usize,
    /// Items routed per category, indexed by [`Category::index`]
    pub routed: [u64; Category::COUNT],
}

impl DispatcherReport {
    pub fn total_routed(&self) -> u64 {
        self.routed.iter().sum()
    }
}

pub struct Dispatcher<'a> {
    sources: &'a [BoundedQueue<Message>],
    editors: &'a [UnboundedQueue<Message>; Category::COUNT],
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        sources: &'a [BoundedQueue<Message>],
        editors: &'a [UnboundedQueue<Message>; Category::COUNT],
    ) -> Self {
        Self { sources, editors }
    }

    pub fn run(self) -> PipelineResult<DispatcherReport> {
        let source_count = self.sources.len();
        log::debug!("Dispatcher polling {} producer queues", source_count);

        let mut report = DispatcherReport {
            sentinels_received: 0,
            routed: [0; Category::COUNT],
        };
        let mut cursor = 0;
        let mut misses = 0;

        while report.sentinels_received < source_count {
            let polled = self.sources[cursor].dequeue_nonblocking().in_stage(STAGE)?;
            let polled_from = cursor;
            cursor = (cursor + 1) % source_count;

            match polled {
                None => {
                    misses += 1;
                    if misses >= source_count {
                        misses = 0;
                        std::thread::yield_now();
                    }
                }
                Some(Message::Done) => {
                    misses = 0;
                    report.sentinels_received += 1;
                    log::debug!(
                        "Dispatcher received Done from queue {} ({}/{})",
                        polled_from,
                        report.sentinels_received,
                        source_count
                    );
                }
                Some(Message::Item(item)) => {
                    misses = 0;
                    let lane = item.category.index();
                    log::trace!("Dispatcher routing {}", item);
                    self.editors[lane]
                        .enqueue(Message::Item(item))
                        .in_stage(STAGE)?;
                    report.routed[lane] += 1;
                }
            }
        }

        for editor_queue in self.editors {
            editor_queue.enqueue(Message::Done).in_stage(STAGE)?;
        }
        log::debug!("Dispatcher finished: {} items routed", report.total_routed());

        Ok(report)
    }
}

//! Editor stage: one per category, forwards items to the shared sink queue

use crate::pipeline::error::{PipelineResult, StageContext};
use crate::queue::{BoundedQueue, Category, Message, UnboundedQueue};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorReport {
    pub category: Category,
    pub forwarded: u64,
}

pub struct Editor<'a> {
    category: Category,
    inbox: &'a UnboundedQueue<Message>,
    outbox: &'a BoundedQueue<Message>,
    delay: Duration,
}

impl<'a> Editor<'a> {
    pub fn new(
        category: Category,
        inbox: &'a UnboundedQueue<Message>,
        outbox: &'a BoundedQueue<Message>,
        delay: Duration,
    ) -> Self {
        Self {
            category,
            inbox,
            outbox,
            delay,
        }
    }

    /// Forward every item, pausing `delay` after each, until `Done` arrives;
    /// `Done` is forwarded without a pause
    pub fn run(self) -> PipelineResult<EditorReport> {
        let stage = format!("{} editor", self.category);
        log::debug!("{} editor starting", self.category);

        let mut forwarded = 0;
        loop {
            match self.inbox.dequeue_blocking().in_stage(&stage)? {
                Message::Item(item) => {
                    if item.category != self.category {
                        log::warn!("{} editor received misrouted {}", self.category, item);
                    }
                    self.outbox
                        .enqueue_blocking(Message::Item(item))
                        .in_stage(&stage)?;
                    forwarded += 1;
                    if !self.delay.is_zero() {
                        std::thread::sleep(self.delay);
                    }
                }
                Message::Done => {
                    self.outbox.enqueue_blocking(Message::Done).in_stage(&stage)?;
                    break;
                }
            }
        }

        log::debug!("{} editor finished: {} items", self.category, forwarded);
        Ok(EditorReport {
            category: self.category,
            forwarded,
        })
    }
}

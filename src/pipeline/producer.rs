//! Producer stage: generates categorized items into its private queue

use crate::pipeline::error::{PipelineError, PipelineResult, StageContext};
use crate::queue::{BoundedQueue, Category, Item, Message};
use rand::Rng;

/// What one producer generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerReport {
    pub producer_id: u32,
    /// Items generated per category, indexed by [`Category::index`]
    pub produced: [u64; Category::COUNT],
}

impl ProducerReport {
    pub fn total(&self) -> u64 {
        self.produced.iter().sum()
    }
}

pub struct Producer<'a, R> {
    id: u32,
    item_count: u64,
    queue: &'a BoundedQueue<Message>,
    rng: R,
}

impl<'a, R: Rng> Producer<'a, R> {
    pub fn new(id: u32, item_count: u64, queue: &'a BoundedQueue<Message>, rng: R) -> Self {
        Self {
            id,
            item_count,
            queue,
            rng,
        }
    }

    /// Enqueue `item_count` items, each with a uniformly random category,
    /// then exactly one `Done`
    pub fn run(mut self) -> PipelineResult<ProducerReport> {
        let stage = format!("producer {}", self.id);
        log::debug!(
            "Producer {} starting ({} items, queue capacity {})",
            self.id,
            self.item_count,
            self.queue.capacity()
        );

        // Running index per category
        let mut next_index = [0u64; Category::COUNT];
        for _ in 0..self.item_count {
            let category = Category::from_index(self.rng.gen_range(0..Category::COUNT))
                .ok_or_else(|| PipelineError::invariant(&stage, "category draw out of range"))?;
            let slot = &mut next_index[category.index()];
            let item = Item::new(self.id, *slot, category);
            *slot += 1;

            log::trace!("Producer {} enqueue {}", self.id, item);
            self.queue
                .enqueue_blocking(Message::Item(item))
                .in_stage(&stage)?;
        }

        self.queue.enqueue_blocking(Message::Done).in_stage(&stage)?;
        log::debug!("Producer {} finished", self.id);

        Ok(ProducerReport {
            producer_id: self.id,
            produced: next_index,
        })
    }
}

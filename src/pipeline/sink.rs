//! Sink stage: renders items from the shared queue until every editor is done

use crate::pipeline::error::{PipelineResult, StageContext};
use crate::queue::{BoundedQueue, Category, Message};
use std::io::Write;

const STAGE: &str = "sink";

/// Line written once all editors have sent `Done`
pub const TERMINAL_LINE: &str = "DONE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkReport {
    pub rendered: u64,
    pub sentinels_received: usize,
}

pub struct SinkConsumer<'a, W> {
    inbox: &'a BoundedQueue<Message>,
    out: W,
}

impl<'a, W: Write> SinkConsumer<'a, W> {
    pub fn new(inbox: &'a BoundedQueue<Message>, out: W) -> Self {
        Self { inbox, out }
    }

    /// Render items until exactly one `Done` per category has arrived
    pub fn run(mut self) -> PipelineResult<SinkReport> {
        let mut report = SinkReport {
            rendered: 0,
            sentinels_received: 0,
        };

        while report.sentinels_received < Category::COUNT {
            match self.inbox.dequeue_blocking().in_stage(STAGE)? {
                Message::Item(item) => {
                    writeln!(self.out, "{}", item)?;
                    report.rendered += 1;
                }
                Message::Done => {
                    report.sentinels_received += 1;
                    log::debug!(
                        "Sink received Done ({}/{})",
                        report.sentinels_received,
                        Category::COUNT
                    );
                }
            }
        }

        writeln!(self.out, "{}", TERMINAL_LINE)?;
        self.out.flush()?;
        log::debug!("Sink finished: {} items rendered", report.rendered);

        Ok(report)
    }
}

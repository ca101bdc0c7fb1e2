//! Pipeline wiring: builds every queue, runs one thread per stage and joins
//! them in pipeline order
//!
//! All stage threads live inside a single `std::thread::scope`, so every
//! handle is joined before `run_pipeline` returns. A stage that fails or
//! panics, or a thread that cannot be spawned, terminates the process: the
//! remaining stages would otherwise wait forever on queues nobody feeds.

use crate::core::error_handling::exit_with_error;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::dispatcher::{Dispatcher, DispatcherReport};
use crate::pipeline::editor::{Editor, EditorReport};
use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::producer::{Producer, ProducerReport};
use crate::pipeline::sink::{SinkConsumer, SinkReport};
use crate::pipeline::state::{PipelineState, StateTracker};
use crate::queue::{BoundedQueue, Category, Message, UnboundedQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use strum::IntoEnumIterator;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, Scope, ScopedJoinHandle};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub producers: Vec<ProducerReport>,
    pub dispatcher: DispatcherReport,
    pub editors: Vec<EditorReport>,
    pub sink: SinkReport,
    pub final_state: PipelineState,
}

impl PipelineReport {
    pub fn total_produced(&self) -> u64 {
        self.producers.iter().map(ProducerReport::total).sum()
    }

    pub fn total_forwarded(&self) -> u64 {
        self.editors.iter().map(|editor| editor.forwarded).sum()
    }
}

/// Run the whole pipeline, rendering to `out`
///
/// Returns an error only for problems found before any thread starts.
pub fn run_pipeline<W: Write + Send>(
    config: &PipelineConfig,
    out: &mut W,
) -> PipelineResult<PipelineReport> {
    let producer_queues = config
        .producers
        .iter()
        .map(|producer| {
            BoundedQueue::new(producer.queue_capacity).map_err(|e| {
                PipelineError::config(format!("Producer {} queue: {}", producer.id, e))
            })
        })
        .collect::<PipelineResult<Vec<BoundedQueue<Message>>>>()?;
    let editor_queues: [UnboundedQueue<Message>; Category::COUNT] =
        std::array::from_fn(|_| UnboundedQueue::new());
    let sink_queue: BoundedQueue<Message> = BoundedQueue::new(config.sink_capacity)
        .map_err(|e| PipelineError::config(format!("Sink queue: {}", e)))?;
    let state = StateTracker::new();

    log::info!(
        "Starting pipeline: {} producers, {} items, sink capacity {}, edit delay {:?}",
        config.producers.len(),
        config.total_items(),
        config.sink_capacity,
        config.edit_delay
    );

    thread::scope(|scope| -> PipelineResult<PipelineReport> {
        let producers: Vec<_> = config
            .producers
            .iter()
            .zip(&producer_queues)
            .enumerate()
            .map(|(position, (producer, queue))| {
                let rng = stage_rng(config.seed, position);
                let stage = Producer::new(producer.id, producer.item_count, queue, rng);
                spawn_stage(scope, format!("producer-{}", producer.id), move || {
                    stage.run()
                })
            })
            .collect();

        let dispatcher = Dispatcher::new(&producer_queues, &editor_queues);
        let dispatcher = spawn_stage(scope, "dispatcher".to_string(), move || dispatcher.run());

        let editors: Vec<_> = Category::iter()
            .map(|category| {
                let stage = Editor::new(
                    category,
                    &editor_queues[category.index()],
                    &sink_queue,
                    config.edit_delay,
                );
                spawn_stage(
                    scope,
                    format!("editor-{}", category.name().to_lowercase()),
                    move || stage.run(),
                )
            })
            .collect();

        let sink = SinkConsumer::new(&sink_queue, out);
        let sink = spawn_stage(scope, "sink".to_string(), move || sink.run());

        let producers = producers
            .into_iter()
            .map(|handle| join_stage(handle, "producer"))
            .collect::<PipelineResult<Vec<_>>>()?;
        state.advance(PipelineState::Draining)?;

        let dispatcher = join_stage(dispatcher, "dispatcher")?;
        state.advance(PipelineState::Finalizing)?;

        let editors = editors
            .into_iter()
            .map(|handle| join_stage(handle, "editor"))
            .collect::<PipelineResult<Vec<_>>>()?;
        let sink = join_stage(sink, "sink")?;
        state.advance(PipelineState::Done)?;

        log::info!("Pipeline done: {} items rendered", sink.rendered);

        Ok(PipelineReport {
            producers,
            dispatcher,
            editors,
            sink,
            final_state: state.current()?,
        })
    })
}

/// Seeded runs give producer `position` the seed `seed + position`
fn stage_rng(seed: Option<u64>, position: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(position as u64)),
        None => StdRng::from_entropy(),
    }
}

fn spawn_stage<'scope, 'env, T, F>(
    scope: &'scope Scope<'scope, 'env>,
    name: String,
    stage: F,
) -> ScopedJoinHandle<'scope, T>
where
    F: FnOnce() -> PipelineResult<T> + Send + 'scope,
    T: Send + 'scope,
{
    let stage_name = name.clone();
    let spawned = thread::Builder::new()
        .name(name.clone())
        .spawn_scoped(scope, move || {
            match panic::catch_unwind(AssertUnwindSafe(stage)) {
                Ok(Ok(report)) => report,
                Ok(Err(error)) => abort_pipeline(&error),
                Err(_) => abort_pipeline(&PipelineError::invariant(
                    stage_name,
                    "stage thread panicked",
                )),
            }
        });

    match spawned {
        Ok(handle) => handle,
        Err(e) => abort_pipeline(&PipelineError::Resource {
            message: format!("cannot spawn {} thread: {}", name, e),
        }),
    }
}

fn join_stage<T>(handle: ScopedJoinHandle<'_, T>, stage: &str) -> PipelineResult<T> {
    handle
        .join()
        .map_err(|_| PipelineError::invariant(stage, "stage thread panicked"))
}

fn abort_pipeline(error: &PipelineError) -> ! {
    exit_with_error(error, "Pipeline stage failed")
}

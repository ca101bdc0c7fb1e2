//! The publishing pipeline
//!
//! ```text
//! Producer × N ─▶ BoundedQueue × N ─▶ Dispatcher ─▶ UnboundedQueue × 3
//!     ─▶ Editor × 3 ─▶ shared BoundedQueue ─▶ SinkConsumer ─▶ output
//! ```
//!
//! Each stage runs on its own thread (`N + 5` in total). Termination is
//! signalled only by `Done` messages: every producer sends one, the
//! dispatcher sends one to each editor after hearing from every producer,
//! each editor forwards its own to the sink, and the sink stops after three.
//!
//! # Example
//!
//! ```rust,no_run
//! use newsdesk::pipeline::{run_pipeline, PipelineConfig, ProducerConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::new(
//!     vec![ProducerConfig::new(1, 3, 2), ProducerConfig::new(2, 2, 2)],
//!     3,
//! )?
//! .with_edit_delay(Duration::from_millis(10));
//!
//! let mut out = std::io::stdout();
//! let report = run_pipeline(&config, &mut out)?;
//! assert_eq!(report.sink.rendered, 5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod producer;
pub mod runner;
pub mod sink;
pub mod state;

pub use config::{ConfigOverrides, PipelineConfig, ProducerConfig, RawConfig, DEFAULT_EDIT_DELAY};
pub use dispatcher::{Dispatcher, DispatcherReport};
pub use editor::{Editor, EditorReport};
pub use error::{PipelineError, PipelineResult};
pub use producer::{Producer, ProducerReport};
pub use runner::{run_pipeline, PipelineReport};
pub use sink::{SinkConsumer, SinkReport, TERMINAL_LINE};
pub use state::{PipelineState, StateTracker};

#[cfg(test)]
mod tests;

//! Event sink implementations.
//!
//! The scheduler core never prints or persists anything itself; sinks
//! subscribe to the [`StepEvent`] stream and own presentation. Provides an
//! in-memory sink for tests/dev and a JSON-lines sink for external
//! consumers.

use std::collections::VecDeque;
use std::io::Write;

use serde::Serialize;

use crate::core::event::StepEvent;

/// Event sink abstraction.
pub trait EventSink: Send {
    /// Called once at the start of each step, before any of its events.
    fn begin_step(&mut self, step: u64);
    /// Record one step-scoped event.
    fn record(&mut self, event: &StepEvent);
}

/// In-memory event sink for testing and dev.
pub struct InMemorySink {
    events: VecDeque<(u64, StepEvent)>,
    current_step: u64,
    max_events: usize,
}

impl InMemorySink {
    /// Create a new in-memory sink with a bounded buffer; the oldest
    /// events are dropped once the bound is reached.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            current_step: 0,
            max_events,
        }
    }

    /// Snapshot of stored events with the step each was emitted in.
    #[must_use]
    pub fn events(&self) -> Vec<(u64, StepEvent)> {
        self.events.iter().cloned().collect()
    }

    /// Events from one step, in emission order.
    #[must_use]
    pub fn events_for_step(&self, step: u64) -> Vec<StepEvent> {
        self.events
            .iter()
            .filter(|(s, _)| *s == step)
            .map(|(_, e)| e.clone())
            .collect()
    }
}

impl EventSink for InMemorySink {
    fn begin_step(&mut self, step: u64) {
        self.current_step = step;
    }

    fn record(&mut self, event: &StepEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back((self.current_step, event.clone()));
    }
}

/// Step boundary marker written by [`JsonLineSink`].
#[derive(Debug, Serialize)]
struct StepMarker {
    r#type: &'static str,
    step: u64,
}

/// Sink writing one JSON object per line: a `{"type":"step","step":N}`
/// marker at each step boundary, then each event.
///
/// Write failures are logged via `tracing` and otherwise swallowed; a
/// broken reporter must not abort the simulation.
pub struct JsonLineSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLineSink<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => {
                if let Err(e) = writeln!(self.writer, "{line}") {
                    tracing::error!("failed to write event line: {e}");
                }
            }
            Err(e) => tracing::error!("failed to serialize event: {e}"),
        }
    }
}

impl<W: Write + Send> EventSink for JsonLineSink<W> {
    fn begin_step(&mut self, step: u64) {
        self.write_line(&StepMarker {
            r#type: "step",
            step,
        });
    }

    fn record(&mut self, event: &StepEvent) {
        self.write_line(event);
    }
}

// crates/fact-logic/src/trace.rs
// ============================================================================
// Module: Fact Trace Hooks
// Description: Observation hooks for composition and rendering.
// Purpose: Let callers log or collect algebra events without hard dependencies.
// Dependencies: crate::{fact, render}, serde, serde_json, std::io
// ============================================================================

//! ## Overview
//! Composition and rendering report what they did to a [`FactTrace`]: which
//! operator was applied, whether the deferred operand had to be forced, and
//! which render mode was selected. [`NoopTrace`] is the fast path;
//! [`JsonLineTrace`] writes one JSON record per event to any writer, and
//! [`CollectingTrace`] keeps events in memory for inspection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Serialize;
use serde_json::json;

use crate::fact::Operator;
use crate::render::RenderMode;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Outcome of one `and`/`or` composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositionEvent {
    /// Operator applied
    pub operator: Operator,
    /// Polarity of the left operand
    pub lhs_yes: bool,
    /// Whether the right operand had to be forced to decide polarity
    pub rhs_required: bool,
    /// Polarity of the resulting composite
    pub is_yes: bool,
}

/// Outcome of one top-level render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderEvent {
    /// Leaf count of the rendered tree
    pub complexity: usize,
    /// Mode selected from the complexity
    pub mode: RenderMode,
    /// Polarity of the rendered fact
    pub is_yes: bool,
    /// Length of the rendered text in bytes
    pub output_len: usize,
}

/// Any event reported to a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A composite was built
    Composed(CompositionEvent),
    /// A fact was rendered
    Rendered(RenderEvent),
}

// ============================================================================
// SECTION: Trace Trait
// ============================================================================

/// Trace hook for fact composition and rendering
pub trait FactTrace {
    /// Called after each `and`/`or` composition
    fn on_composed(&mut self, event: &CompositionEvent);

    /// Called after each top-level render
    fn on_rendered(&mut self, event: &RenderEvent);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl FactTrace for NoopTrace {
    fn on_composed(&mut self, _event: &CompositionEvent) {}

    fn on_rendered(&mut self, _event: &RenderEvent) {}
}

// ============================================================================
// SECTION: Collecting Trace
// ============================================================================

/// Keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct CollectingTrace {
    /// Events in the order they were reported
    pub events: Vec<TraceEvent>,
}

impl FactTrace for CollectingTrace {
    fn on_composed(&mut self, event: &CompositionEvent) {
        self.events.push(TraceEvent::Composed(*event));
    }

    fn on_rendered(&mut self, event: &RenderEvent) {
        self.events.push(TraceEvent::Rendered(*event));
    }
}

// ============================================================================
// SECTION: JSON Line Trace
// ============================================================================

/// Writes each event as one JSON line
///
/// Write failures never interrupt composition or rendering; they are counted
/// and can be inspected with [`JsonLineTrace::failed_writes`].
pub struct JsonLineTrace<W: Write> {
    /// Output writer for event records
    writer: W,
    /// Number of records that could not be written
    failed_writes: usize,
}

impl<W: Write> JsonLineTrace<W> {
    /// Creates a trace writing to `writer`
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Returns how many records failed to write
    #[must_use]
    pub const fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    /// Consumes the trace and returns the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Serializes one record followed by a newline
    fn write_record(&mut self, record: &serde_json::Value) {
        let written = serde_json::to_writer(&mut self.writer, record)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if written.is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
        }
    }
}

impl<W: Write> FactTrace for JsonLineTrace<W> {
    fn on_composed(&mut self, event: &CompositionEvent) {
        let record = json!({
            "event": "fact_composed",
            "operator": event.operator,
            "lhs_yes": event.lhs_yes,
            "rhs_required": event.rhs_required,
            "is_yes": event.is_yes,
        });
        self.write_record(&record);
    }

    fn on_rendered(&mut self, event: &RenderEvent) {
        let record = json!({
            "event": "fact_rendered",
            "complexity": event.complexity,
            "mode": event.mode,
            "is_yes": event.is_yes,
            "output_len": event.output_len,
        });
        self.write_record(&record);
    }
}

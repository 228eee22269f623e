//! 诊断输出
//!
//! 每次成功的替换都会产生一个 [`InlineEvent`]。事件交给注入的
//! [`DiagnosticsSink`]，不会影响输出字节。

use std::fmt;
use std::sync::Mutex;

use crate::internalizer::TransformKind;

/// One successful substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEvent {
    pub pass: TransformKind,
    /// Stage inside the pass; resources run two
    pub stage: u8,
    /// The matched reference, as written in the document
    pub reference: String,
}

impl InlineEvent {
    pub fn new(pass: TransformKind, stage: u8, reference: impl Into<String>) -> Self {
        Self {
            pass,
            stage,
            reference: reference.into(),
        }
    }
}

impl fmt::Display for InlineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - IT{}] - Match {}",
            self.pass, self.stage, self.reference
        )
    }
}

/// Receives diagnostics from the rewrite passes
pub trait DiagnosticsSink {
    fn record(&self, event: InlineEvent);
}

/// Forwards events to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, event: InlineEvent) {
        tracing::info!(pass = %event.pass, reference = %event.reference, "{}", event);
    }
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticsSink for SilentSink {
    fn record(&self, _event: InlineEvent) {}
}

/// Keeps events in memory, in the order they were recorded
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<InlineEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InlineEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn references(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.reference).collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, event: InlineEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

//! Structured engine progress events.
//!
//! The engine never prints; hosts that want progress inject a
//! [`ReportObserver`] and receive one [`EngineEvent`] per step.

use serde::Serialize;

/// Progress events emitted during a report run, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Specification resolved and parsed; the run is starting.
    RunStarted {
        /// Plugin driving the run.
        plugin_id: String,
        /// Specification being executed.
        spec_id: String,
        /// Number of variables to generate.
        variables: usize,
    },
    /// A variable's generation step began.
    VariableStarted {
        /// Variable name.
        name: String,
        /// Zero-based position in the specification.
        index: usize,
        /// Total variable count.
        total: usize,
    },
    /// The variable's prompt rendered successfully.
    PromptRendered {
        /// Variable name.
        name: String,
        /// Rendered prompt length in bytes.
        chars: usize,
    },
    /// The client answered and the value entered the context.
    VariableGenerated {
        /// Variable name.
        name: String,
        /// Raw response length in bytes.
        chars: usize,
    },
    /// String-list coercion degraded to the raw-text fallback.
    CoercionFallback {
        /// Variable whose response was malformed.
        name: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The final template rendered.
    TemplateRendered {
        /// Rendered body length in bytes.
        chars: usize,
    },
    /// The run finished successfully.
    RunCompleted {
        /// Plugin that drove the run.
        plugin_id: String,
        /// Specification that was executed.
        spec_id: String,
        /// Variables generated.
        variables: usize,
    },
}

/// Host-injectable observer for engine progress.
pub trait ReportObserver: Send + Sync {
    /// Called once per engine step, in order.
    fn on_event(&self, event: &EngineEvent);
}

/// Observer that drops every event (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReportObserver for NoopObserver {
    fn on_event(&self, _event: &EngineEvent) {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

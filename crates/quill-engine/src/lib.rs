//! # quill-engine
//!
//! The generation orchestrator: executes one report-generation request
//! end to end.
//!
//! - **Engine**: Resolve plugin → init hook → look up + parse spec →
//!   seed context → per-variable generate loop → final template render
//! - **Context**: [`context::GenerationContext`] — append-only mapping
//!   seeded from the bundle, owned by one invocation
//! - **Resolver**: [`resolve::resolve_reference`] — the dotted-path
//!   reference micro-language over `bundle.*` / `ctx.*`
//! - **Coercion**: [`coerce::coerce_response`] — typed response
//!   handling with the string-list fence fallback
//! - **Events**: [`events::ReportObserver`] — injectable structured
//!   progress observer, keeping the core free of output side effects
//!
//! Variables are generated strictly sequentially, in specification
//! order; each may depend on anything declared before it.
//!
//! ## Crate Position
//!
//! Aggregation layer. Depends on: quill-core, quill-spec, quill-plugin,
//! quill-llm, quill-render.

#![deny(unsafe_code)]

pub mod coerce;
pub mod context;
pub mod engine;
pub mod errors;
pub mod events;
pub mod ingest;
pub mod report;
pub mod resolve;

pub use context::{GenerationContext, RESERVED_KEYS};
pub use engine::ReportEngine;
pub use errors::EngineError;
pub use events::{EngineEvent, NoopObserver, ReportObserver};
pub use report::{GeneratedReport, ReportMetadata, ReportRequest};

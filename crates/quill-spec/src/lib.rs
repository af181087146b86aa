//! # quill-spec
//!
//! Report specification types and parser.
//!
//! A specification is a YAML document naming an ordered list of
//! LLM-derived variables plus the final template to render once all
//! variables are resolved. Declared order *is* execution order — the
//! engine computes no dependency graph, so authors declare variables
//! after their inputs.
//!
//! Specifications are parsed fresh per generation call from the
//! plugin-supplied serialized form; the core never caches them.
//!
//! ## Crate Position
//!
//! Standalone (no quill crate dependencies).
//! Depended on by: quill-engine.

#![deny(unsafe_code)]

pub mod errors;
pub mod parser;
pub mod types;

pub use errors::SpecError;
pub use parser::parse_spec;
pub use types::{ReportSpec, VariableDef, VariableKind};

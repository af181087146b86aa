//! # quill-render
//!
//! Tera-based template rendering with the report filter set.
//!
//! Prompt and report templates are logic-enabled Tera templates. On top
//! of Tera's builtins (conditionals, loops, `join`, …) this crate
//! registers the filters report templates lean on:
//!
//! | filter          | purpose                                   |
//! |-----------------|-------------------------------------------|
//! | `number_format` | thousands grouping                        |
//! | `fixed`         | fixed-decimal formatting                  |
//! | `keys`          | object-key enumeration                    |
//! | `top_entries`   | top-N `{key, value}` pairs by value       |
//! | `take`          | first-N array slice                       |
//!
//! ## Crate Position
//!
//! Standalone (no quill crate dependencies).
//! Depended on by: quill-engine.

#![deny(unsafe_code)]

pub mod engine;
pub mod errors;
mod filters;

pub use engine::TemplateEngine;
pub use errors::RenderError;

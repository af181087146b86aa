//! # quill-core
//!
//! Bundle data model and shared utilities for the quill report engine.
//!
//! This crate provides the vocabulary the other quill crates build on:
//!
//! - **Bundles**: [`bundle::Bundle`] — the standardized container an
//!   ingestion plugin produces (records, statistics, samples, provenance)
//! - **Provenance**: [`bundle::BundleMetadata`] and [`bundle::IngestMethod`]
//!   describing where and how a bundle's data was obtained
//! - **Fences**: [`fences::strip_code_fence`] for unwrapping fenced model
//!   output before structured parsing
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by quill-plugin and quill-engine.

#![deny(unsafe_code)]

pub mod bundle;
pub mod fences;

pub use bundle::{Bundle, BundleError, BundleMetadata, IngestMethod, RateLimit};

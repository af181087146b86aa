//! # quill-llm
//!
//! Generation-client contract and the shipped HTTP client.
//!
//! The engine talks to language models through one narrow contract:
//! [`client::GenerationClient`] turns a rendered prompt into a single
//! string response. Errors propagate fatally — retry policy belongs to
//! the client implementation or the caller, never this layer.
//!
//! - [`client`] — the contract and [`client::GenerationRequest`]
//! - [`config`] — [`config::GenerationConfig`] and the
//!   [`config::build_client`] factory
//! - [`openai`] — [`openai::OpenAiCompatClient`], a non-streaming
//!   chat-completions client for OpenAI-compatible endpoints
//!
//! ## Crate Position
//!
//! Standalone (no quill crate dependencies).
//! Depended on by: quill-engine.

#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod errors;
pub mod openai;

pub use client::{GenerationClient, GenerationRequest};
pub use config::{GenerationConfig, build_client};
pub use errors::ClientError;
pub use openai::OpenAiCompatClient;

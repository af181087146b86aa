//! Engine errors.
//!
//! Everything here is fatal to the report run that raised it. The one
//! locally-recovered failure — string-list coercion — never becomes an
//! error; see [`crate::coerce`].

use std::path::PathBuf;

use thiserror::Error;

use quill_llm::ClientError;
use quill_plugin::{IngestionCapabilities, IngestionKind, PluginError};
use quill_render::RenderError;
use quill_spec::SpecError;

/// Fatal report-generation errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested plugin id is not in the registry.
    #[error("plugin `{0}` is not registered")]
    PluginNotFound(String),

    /// The plugin's initialization hook failed.
    #[error("plugin `{id}` failed to initialize: {source}")]
    PluginInit {
        /// Plugin that failed.
        id: String,
        /// Hook error.
        #[source]
        source: PluginError,
    },

    /// The requested specification id is not in the plugin's table.
    #[error("specification `{spec_id}` not found in plugin `{plugin_id}`")]
    SpecNotFound {
        /// Plugin that was asked.
        plugin_id: String,
        /// Missing specification id.
        spec_id: String,
    },

    /// The specification document failed to parse.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A prompt or template file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Prompt or template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The generation client failed.
    #[error("generation client error: {0}")]
    Client(#[from] ClientError),

    /// Bundle or context data could not be serialized for rendering.
    #[error("context serialization failed: {0}")]
    Context(#[from] serde_json::Error),

    /// The caller requested an ingestion method the plugin does not
    /// support; carries the plugin's actual capabilities.
    #[error("plugin `{plugin_id}` does not support {requested} ingestion ({capabilities})")]
    CapabilityMismatch {
        /// Plugin that was asked.
        plugin_id: String,
        /// Requested ingestion kind.
        requested: IngestionKind,
        /// What the plugin actually declares.
        capabilities: IngestionCapabilities,
    },

    /// A plugin ingestor failed.
    #[error("ingestion failed: {0}")]
    Ingest(#[from] PluginError),
}

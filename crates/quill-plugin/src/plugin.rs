//! The plugin contract.
//!
//! Ingestion support is expressed through typed accessors rather than
//! runtime presence probes: a plugin that can ingest files returns
//! `Some` from [`Plugin::file_ingestor`], and symmetrically for
//! [`Plugin::api_ingestor`]. The validator cross-checks these accessors
//! against the declared [`IngestionCapabilities`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use quill_core::Bundle;

use crate::capability::IngestionCapabilities;
use crate::errors::PluginError;

/// Result of an API ingestion call: the bundle plus any endpoint
/// metadata the plugin chose to surface.
#[derive(Debug, Clone)]
pub struct ApiIngestion {
    /// The ingested bundle.
    pub bundle: Bundle,
    /// Endpoint-specific metadata (pagination cursors, quota state).
    pub api_metadata: Option<Value>,
}

/// File ingestion entry point.
#[async_trait]
pub trait FileIngestor: Send + Sync {
    /// Ingest the file at `path` into a bundle.
    async fn ingest_file(&self, path: &Path) -> Result<Bundle, PluginError>;
}

/// Remote-query ingestion entry point.
#[async_trait]
pub trait ApiIngestor: Send + Sync {
    /// Run `query` against the plugin's endpoint and bundle the result.
    async fn ingest_query(&self, query: Value) -> Result<ApiIngestion, PluginError>;

    /// JSON schema describing accepted queries, if the plugin publishes
    /// one.
    fn query_schema(&self) -> Option<Value> {
        None
    }
}

/// A self-contained extension supplying ingestion, specifications,
/// prompts, and templates for one data domain.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Stable plugin identifier (the registry key).
    fn id(&self) -> &str;

    /// Semantic version of the plugin.
    fn version(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Declared ingestion capabilities.
    ///
    /// Queried live by the registry's discovery scans, never cached.
    fn capabilities(&self) -> IngestionCapabilities;

    /// Serialized specifications keyed by specification id.
    fn specifications(&self) -> HashMap<String, String>;

    /// Directory holding the plugin's prompt templates.
    fn prompts_dir(&self) -> PathBuf;

    /// Directory holding the plugin's report templates.
    fn templates_dir(&self) -> PathBuf;

    /// Optional async initialization hook, run by the engine before the
    /// plugin is first used in a report run.
    async fn initialize(&self) -> Result<(), PluginError> {
        Ok(())
    }

    /// The file ingestor, when file ingestion is supported.
    fn file_ingestor(&self) -> Option<&dyn FileIngestor> {
        None
    }

    /// The API ingestor, when remote-query ingestion is supported.
    fn api_ingestor(&self) -> Option<&dyn ApiIngestor> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct MinimalPlugin;

    #[async_trait]
    impl Plugin for MinimalPlugin {
        fn id(&self) -> &str {
            "minimal"
        }
        fn version(&self) -> &str {
            "0.1.0"
        }
        fn description(&self) -> &str {
            "trait-default fixture"
        }
        fn capabilities(&self) -> IngestionCapabilities {
            IngestionCapabilities::default()
        }
        fn specifications(&self) -> HashMap<String, String> {
            HashMap::new()
        }
        fn prompts_dir(&self) -> PathBuf {
            PathBuf::from("prompts")
        }
        fn templates_dir(&self) -> PathBuf {
            PathBuf::from("templates")
        }
    }

    #[tokio::test]
    async fn initialize_defaults_to_noop() {
        assert!(MinimalPlugin.initialize().await.is_ok());
    }

    #[test]
    fn ingestors_default_to_none() {
        assert!(MinimalPlugin.file_ingestor().is_none());
        assert!(MinimalPlugin.api_ingestor().is_none());
    }
}

//! Ingestion dispatch.
//!
//! Convenience entry points that resolve a plugin, check the requested
//! ingestion method against its declared capabilities, and delegate to
//! the plugin's ingestor. A mismatch fails fast and carries the
//! plugin's actual capabilities for diagnostics.

use std::path::Path;

use serde_json::Value;
use tracing::instrument;

use quill_core::Bundle;
use quill_plugin::{ApiIngestion, IngestionKind};

use crate::engine::ReportEngine;
use crate::errors::EngineError;

impl ReportEngine {
    /// Ingest a local file through the named plugin.
    #[instrument(skip(self, path))]
    pub async fn ingest_file(&self, plugin_id: &str, path: &Path) -> Result<Bundle, EngineError> {
        let plugin = self
            .registry()
            .get(plugin_id)
            .ok_or_else(|| EngineError::PluginNotFound(plugin_id.to_string()))?;

        let capabilities = plugin.capabilities();
        let Some(ingestor) = plugin.file_ingestor().filter(|_| capabilities.file) else {
            return Err(EngineError::CapabilityMismatch {
                plugin_id: plugin_id.to_string(),
                requested: IngestionKind::File,
                capabilities,
            });
        };

        Ok(ingestor.ingest_file(path).await?)
    }

    /// Run a remote query through the named plugin.
    #[instrument(skip(self, query))]
    pub async fn ingest_api(
        &self,
        plugin_id: &str,
        query: Value,
    ) -> Result<ApiIngestion, EngineError> {
        let plugin = self
            .registry()
            .get(plugin_id)
            .ok_or_else(|| EngineError::PluginNotFound(plugin_id.to_string()))?;

        let capabilities = plugin.capabilities();
        let Some(ingestor) = plugin.api_ingestor().filter(|_| capabilities.api) else {
            return Err(EngineError::CapabilityMismatch {
                plugin_id: plugin_id.to_string(),
                requested: IngestionKind::Api,
                capabilities,
            });
        };

        Ok(ingestor.ingest_query(query).await?)
    }
}

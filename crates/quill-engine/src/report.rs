//! Report request and result types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use quill_core::Bundle;
use quill_llm::GenerationConfig;

/// One report-generation request.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Plugin to drive the run.
    pub plugin_id: String,
    /// Specification id within the plugin's table.
    pub spec_id: String,
    /// The ingested data to report over.
    pub bundle: Bundle,
    /// Generation-client configuration for this run.
    pub client: GenerationConfig,
}

/// Generation metadata attached to a finished report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Unique id of this generation run.
    pub report_id: Uuid,
    /// Plugin that drove the run.
    pub plugin_id: String,
    /// Generation client provider id.
    pub provider: String,
    /// Generation client model id.
    pub model: String,
    /// When the run completed.
    pub generated_at: DateTime<Utc>,
    /// Record count of the input bundle.
    pub record_count: usize,
    /// The bundle's ingestion method tag (`file`/`api`), when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingest_method: Option<String>,
}

/// A fully generated report: the rendered body plus metadata.
///
/// Handed to an external document renderer; no format coupling exists
/// at this layer.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReport {
    /// The rendered, trimmed document body.
    pub content: String,
    /// Generation metadata.
    pub metadata: ReportMetadata,
}

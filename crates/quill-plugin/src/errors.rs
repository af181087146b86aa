//! Plugin and registry errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::validator::ValidationReport;

/// Errors surfaced by plugin-supplied hooks and ingestors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin's async initialization hook failed.
    #[error("initialization failed: {0}")]
    Init(String),

    /// An ingestion call failed inside the plugin.
    #[error("ingestion failed: {0}")]
    Ingest(String),

    /// An ingestion source could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An entry with the same id already exists and replacement was not
    /// requested.
    #[error("plugin `{0}` is already registered")]
    Duplicate(String),

    /// The plugin failed behavioral validation; the report carries the
    /// itemized error list.
    #[error("plugin `{id}` failed validation: {summary}", summary = .report.errors.join("; "))]
    Validation {
        /// Id of the rejected plugin.
        id: String,
        /// Full validation report, including warnings.
        report: ValidationReport,
    },
}

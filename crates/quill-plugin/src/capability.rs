//! Ingestion capability declarations.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two ingestion entry points a plugin can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionKind {
    /// Local file ingestion.
    File,
    /// Remote query ingestion.
    Api,
}

impl fmt::Display for IngestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Api => write!(f, "api"),
        }
    }
}

/// A plugin's declaration of which ingestion methods and formats it
/// supports.
///
/// At least one of `file`/`api` must be true for a plugin to validate;
/// a declared method must be matched by the corresponding ingestor
/// accessor on the plugin (checked by the validator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionCapabilities {
    /// Supports ingesting from local files.
    pub file: bool,
    /// Supports ingesting from a remote query endpoint.
    pub api: bool,
    /// File formats accepted when `file` is true (e.g. `csv`, `json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_formats: Option<BTreeSet<String>>,
    /// Endpoints queried when `api` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoints: Option<BTreeSet<String>>,
}

impl IngestionCapabilities {
    /// File-only capabilities over the given formats.
    pub fn file_only<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file: true,
            file_formats: Some(formats.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// API-only capabilities over the given endpoints.
    pub fn api_only<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            api: true,
            api_endpoints: Some(endpoints.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Whether any ingestion method is declared at all.
    pub fn any(&self) -> bool {
        self.file || self.api
    }

    /// Whether both ingestion methods are declared.
    pub fn is_hybrid(&self) -> bool {
        self.file && self.api
    }

    /// Whether the given ingestion kind is declared.
    pub fn supports(&self, kind: IngestionKind) -> bool {
        match kind {
            IngestionKind::File => self.file,
            IngestionKind::Api => self.api,
        }
    }

    /// Whether `format` appears in the declared file formats
    /// (case-insensitive).
    pub fn supports_file_format(&self, format: &str) -> bool {
        self.file
            && self
                .file_formats
                .as_ref()
                .is_some_and(|formats| formats.iter().any(|f| f.eq_ignore_ascii_case(format)))
    }
}

impl fmt::Display for IngestionCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file={}, api={}", self.file, self.api)?;
        if let Some(formats) = &self.file_formats {
            let list: Vec<&str> = formats.iter().map(String::as_str).collect();
            write!(f, ", formats=[{}]", list.join(", "))?;
        }
        if let Some(endpoints) = &self.api_endpoints {
            let list: Vec<&str> = endpoints.iter().map(String::as_str).collect();
            write!(f, ", endpoints=[{}]", list.join(", "))?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! The standardized data container produced by ingestion plugins.
//!
//! A [`Bundle`] holds the records an ingestion call produced, the
//! aggregate statistics computed over them, optional named sample
//! subsets (used to keep LLM prompt context small), and provenance
//! metadata. The generation engine treats bundles as immutable input:
//! it only ever reads from them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the sample set the engine binds under `samples` in prompt
/// contexts when a bundle carries samples.
pub const PRIMARY_SAMPLE_SET: &str = "main";

// ─────────────────────────────────────────────────────────────────────────────
// Provenance
// ─────────────────────────────────────────────────────────────────────────────

/// Rate-limit state observed during a remote-query ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Request quota per window, if the endpoint reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Requests remaining in the current window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// When the current window resets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<DateTime<Utc>>,
}

/// How a bundle's data was obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum IngestMethod {
    /// Loaded from a local file.
    File {
        /// Path the data was read from.
        path: String,
        /// Declared file format (e.g. `csv`, `json`).
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
    /// Fetched from a remote query endpoint.
    Api {
        /// Endpoint the query was issued against.
        endpoint: String,
        /// Wall-clock duration of the remote call, in milliseconds.
        #[serde(skip_serializing_if = "Option::is_none")]
        elapsed_ms: Option<u64>,
        /// Rate-limit state reported by the endpoint.
        #[serde(skip_serializing_if = "Option::is_none")]
        rate_limit: Option<RateLimit>,
    },
}

impl IngestMethod {
    /// Short tag naming the ingestion method (`"file"` or `"api"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::File { .. } => "file",
            Self::Api { .. } => "api",
        }
    }
}

/// Ingestion provenance attached to every bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// When the ingestion completed.
    pub ingested_at: DateTime<Utc>,
    /// Number of records at creation time.
    pub record_count: usize,
    /// Method-specific provenance, when the plugin recorded it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<IngestMethod>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Bundle
// ─────────────────────────────────────────────────────────────────────────────

/// Standardized container of ingested records, statistics, samples, and
/// provenance metadata.
///
/// Created once per ingestion call by a plugin; read-only afterwards.
/// `stats` keys are plugin-defined (counts, aggregates, top-N tables),
/// not a fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Identifier of the data origin (e.g. a dataset or feed name).
    pub source: String,
    /// Ordered records produced by the ingestion.
    pub records: Vec<Value>,
    /// Aggregate statistics keyed by metric name.
    #[serde(default)]
    pub stats: Map<String, Value>,
    /// Ingestion provenance.
    pub metadata: BundleMetadata,
    /// Named sample subsets of `records`, if the plugin extracted any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<BTreeMap<String, Vec<Value>>>,
}

impl Bundle {
    /// Create a bundle over `records`, stamping `record_count` from the
    /// actual record count.
    pub fn new(source: impl Into<String>, records: Vec<Value>) -> Self {
        let record_count = records.len();
        Self {
            source: source.into(),
            records,
            stats: Map::new(),
            metadata: BundleMetadata {
                ingested_at: Utc::now(),
                record_count,
                method: None,
            },
            samples: None,
        }
    }

    /// Replace the stats table.
    pub fn with_stats(mut self, stats: Map<String, Value>) -> Self {
        self.stats = stats;
        self
    }

    /// Insert a single stat entry.
    pub fn with_stat(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.stats.insert(key.into(), value.into());
        self
    }

    /// Attach named sample subsets.
    pub fn with_samples(mut self, samples: BTreeMap<String, Vec<Value>>) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Record the ingestion method.
    pub fn with_method(mut self, method: IngestMethod) -> Self {
        self.metadata.method = Some(method);
        self
    }

    /// The `main` sample set, if present.
    pub fn primary_samples(&self) -> Option<&Vec<Value>> {
        self.samples.as_ref().and_then(|s| s.get(PRIMARY_SAMPLE_SET))
    }

    /// Check the creation-time invariants: `record_count` matches the
    /// actual record count and every sample is drawn from `records`.
    ///
    /// Intended for plugin authors asserting their own output; the
    /// engine trusts bundles as given.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.metadata.record_count != self.records.len() {
            return Err(BundleError::RecordCountMismatch {
                declared: self.metadata.record_count,
                actual: self.records.len(),
            });
        }
        if let Some(samples) = &self.samples {
            for (name, subset) in samples {
                if subset.iter().any(|item| !self.records.contains(item)) {
                    return Err(BundleError::SampleNotInRecords { set: name.clone() });
                }
            }
        }
        Ok(())
    }
}

/// Bundle invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    /// `metadata.record_count` disagrees with `records.len()`.
    #[error("metadata declares {declared} records but the bundle holds {actual}")]
    RecordCountMismatch {
        /// Count recorded in metadata.
        declared: usize,
        /// Actual record count.
        actual: usize,
    },
    /// A sample set contains a record absent from `records`.
    #[error("sample set `{set}` contains a record not present in records")]
    SampleNotInRecords {
        /// Name of the offending sample set.
        set: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64) -> Value {
        json!({"id": id})
    }

    #[test]
    fn new_stamps_record_count() {
        let bundle = Bundle::new("events", vec![record(1), record(2)]);
        assert_eq!(bundle.metadata.record_count, 2);
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn with_stat_accumulates() {
        let bundle = Bundle::new("events", vec![])
            .with_stat("total", 42)
            .with_stat("unique_users", 7);
        assert_eq!(bundle.stats["total"], json!(42));
        assert_eq!(bundle.stats["unique_users"], json!(7));
    }

    #[test]
    fn primary_samples_returns_main_set() {
        let mut samples = BTreeMap::new();
        let _ = samples.insert("main".to_string(), vec![record(1)]);
        let _ = samples.insert("outliers".to_string(), vec![record(2)]);
        let bundle = Bundle::new("events", vec![record(1), record(2)]).with_samples(samples);
        assert_eq!(bundle.primary_samples().unwrap(), &vec![record(1)]);
    }

    #[test]
    fn primary_samples_absent_without_main() {
        let mut samples = BTreeMap::new();
        let _ = samples.insert("outliers".to_string(), vec![record(2)]);
        let bundle = Bundle::new("events", vec![record(2)]).with_samples(samples);
        assert!(bundle.primary_samples().is_none());
    }

    #[test]
    fn validate_rejects_count_mismatch() {
        let mut bundle = Bundle::new("events", vec![record(1)]);
        bundle.metadata.record_count = 5;
        assert_eq!(
            bundle.validate().unwrap_err(),
            BundleError::RecordCountMismatch { declared: 5, actual: 1 }
        );
    }

    #[test]
    fn validate_rejects_foreign_sample() {
        let mut samples = BTreeMap::new();
        let _ = samples.insert("main".to_string(), vec![record(99)]);
        let bundle = Bundle::new("events", vec![record(1)]).with_samples(samples);
        assert_eq!(
            bundle.validate().unwrap_err(),
            BundleError::SampleNotInRecords { set: "main".to_string() }
        );
    }

    #[test]
    fn ingest_method_tags() {
        let file = IngestMethod::File { path: "data.csv".into(), format: Some("csv".into()) };
        let api = IngestMethod::Api { endpoint: "/v1/events".into(), elapsed_ms: Some(120), rate_limit: None };
        assert_eq!(file.tag(), "file");
        assert_eq!(api.tag(), "api");
    }

    #[test]
    fn ingest_method_serializes_tagged() {
        let api = IngestMethod::Api {
            endpoint: "/v1/events".into(),
            elapsed_ms: Some(120),
            rate_limit: Some(RateLimit { limit: Some(100), remaining: Some(98), reset_at: None }),
        };
        let value = serde_json::to_value(&api).unwrap();
        assert_eq!(value["method"], "api");
        assert_eq!(value["endpoint"], "/v1/events");
        assert_eq!(value["rate_limit"]["remaining"], 98);
    }

    #[test]
    fn bundle_roundtrips_through_json() {
        let bundle = Bundle::new("events", vec![record(1)])
            .with_stat("total", 1)
            .with_method(IngestMethod::File { path: "a.json".into(), format: None });
        let value = serde_json::to_value(&bundle).unwrap();
        let back: Bundle = serde_json::from_value(value).unwrap();
        assert_eq!(back, bundle);
    }
}

//! The generation context.
//!
//! One [`GenerationContext`] exists per engine invocation. It is seeded
//! from the bundle, grows by one entry per successfully generated
//! variable, and is never shared across concurrent report runs.

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::warn;

use quill_core::Bundle;

/// The four bundle-derived base keys. Variables can never overwrite
/// them; the seeded `timestamp` and `title` keys are ordinary entries a
/// specification may intentionally redefine.
pub const RESERVED_KEYS: [&str; 4] = ["bundle", "stats", "samples", "metadata"];

static NULL: Value = Value::Null;

/// Append-only mapping from name to value, available to prompt and
/// template rendering.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    values: Map<String, Value>,
    /// Generated variable names in insertion order.
    variable_names: Vec<String>,
}

impl GenerationContext {
    /// Seed a context from a bundle.
    ///
    /// Seeds the four reserved keys (`bundle`, `stats` aliasing
    /// `bundle.stats`, `samples` holding the primary sample set,
    /// `metadata`), a generation `timestamp`, and a `title` derived
    /// from the bundle source.
    pub fn seed(bundle: &Bundle) -> Result<Self, serde_json::Error> {
        let bundle_value = serde_json::to_value(bundle)?;
        let stats = bundle_value.get("stats").cloned().unwrap_or_else(|| Value::Object(Map::new()));
        let metadata = bundle_value.get("metadata").cloned().unwrap_or(Value::Null);
        let samples = bundle
            .primary_samples()
            .map_or(Value::Array(Vec::new()), |records| Value::Array(records.clone()));

        let mut values = Map::new();
        let _ = values.insert("bundle".to_string(), bundle_value);
        let _ = values.insert("stats".to_string(), stats);
        let _ = values.insert("samples".to_string(), samples);
        let _ = values.insert("metadata".to_string(), metadata);
        let _ = values.insert("timestamp".to_string(), Value::String(Utc::now().to_rfc3339()));
        let _ = values.insert("title".to_string(), Value::String(derive_title(&bundle.source)));

        Ok(Self { values, variable_names: Vec::new() })
    }

    /// Store a generated variable.
    ///
    /// The four reserved base keys are never overwritten — such an
    /// attempt is skipped with a warning. Re-declaring an existing
    /// variable name intentionally replaces its value while keeping its
    /// original position in the overlay order.
    pub fn insert_variable(&mut self, name: &str, value: Value) {
        if RESERVED_KEYS.contains(&name) {
            warn!(name, "refusing to overwrite reserved context key");
            return;
        }
        let _ = self.values.insert(name.to_string(), value);
        if !self.variable_names.iter().any(|n| n == name) {
            self.variable_names.push(name.to_string());
        }
    }

    /// Look up any context entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The full bundle value.
    pub fn bundle(&self) -> &Value {
        self.values.get("bundle").unwrap_or(&NULL)
    }

    /// The bundle's stats table.
    pub fn stats(&self) -> &Value {
        self.values.get("stats").unwrap_or(&NULL)
    }

    /// The primary sample set.
    pub fn samples(&self) -> &Value {
        self.values.get("samples").unwrap_or(&NULL)
    }

    /// The bundle's ingestion metadata.
    pub fn metadata(&self) -> &Value {
        self.values.get("metadata").unwrap_or(&NULL)
    }

    /// Generated variables in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variable_names
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }

    /// Number of generated variables (base keys excluded).
    pub fn variable_count(&self) -> usize {
        self.variable_names.len()
    }

    /// The whole context as a JSON object map, for template rendering.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

fn derive_title(source: &str) -> String {
    let mut words: Vec<String> = source
        .split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    words.push("Report".to_string());
    words.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

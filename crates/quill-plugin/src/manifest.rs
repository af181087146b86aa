//! Packaging metadata for a distributed plugin.
//!
//! Plugins are distributed as npm packages in the host ecosystem, so
//! the manifest uses `camelCase` on the wire and its naming constraints
//! follow the npm grammar (see [`crate::validator::validate_manifest`]).

use serde::{Deserialize, Serialize};

/// Identity and packaging metadata for a plugin.
///
/// Constructed once at plugin-author time, validated at registration
/// time, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Stable plugin identifier: lowercase alphanumeric with interior
    /// hyphens, 1–50 characters.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Implementing class reference: PascalCase, alphanumeric, ending
    /// in `Plugin`, 8–100 characters.
    pub class_name: String,
    /// Distribution package name (npm grammar, scoped or unscoped).
    pub package_name: String,
    /// Short description of the plugin's data domain.
    pub description: String,
    /// Full semantic version.
    pub version: String,
    /// Data types the plugin can ingest; must be non-empty.
    pub supported_data_types: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_uses_camel_case_wire_format() {
        let manifest = PluginManifest {
            id: "sales-events".to_string(),
            name: "Sales Events".to_string(),
            class_name: "SalesEventsPlugin".to_string(),
            package_name: "@quill/sales-events".to_string(),
            description: "Sales event feeds".to_string(),
            version: "1.2.0".to_string(),
            supported_data_types: vec!["events".to_string()],
        };
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["className"], "SalesEventsPlugin");
        assert_eq!(value["packageName"], "@quill/sales-events");
        assert_eq!(value["supportedDataTypes"][0], "events");
    }

    #[test]
    fn manifest_roundtrips() {
        let json = r#"{
            "id": "ticket-queue",
            "name": "Ticket Queue",
            "className": "TicketQueuePlugin",
            "packageName": "ticket-queue-plugin",
            "description": "Support ticket exports",
            "version": "0.3.1-beta.2",
            "supportedDataTypes": ["tickets"]
        }"#;
        let manifest: PluginManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.id, "ticket-queue");
        assert_eq!(manifest.version, "0.3.1-beta.2");
    }
}

//! Plugin validation.
//!
//! Two pure entry points: [`validate_manifest`] checks the structural
//! constraints of a [`PluginManifest`]; [`validate_plugin`] checks a
//! live plugin instance's behavioral consistency (identity fields,
//! capability declarations versus implemented ingestors). Neither
//! panics or throws for a failing check — every failure appends one
//! human-readable message to the report.
//!
//! The original host ecosystem also probed for the presence of the
//! required data-side methods at runtime; here the [`crate::Plugin`]
//! trait makes those mandatory, so only the checks the type system
//! cannot express remain.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::manifest::PluginManifest;
use crate::plugin::Plugin;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

static CLASS_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*Plugin$").unwrap());

static PACKAGE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$").unwrap()
});

static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .unwrap()
});

/// Outcome of a validation pass.
///
/// `valid` is true iff `errors` is empty; warnings never affect
/// validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the subject passed validation.
    pub valid: bool,
    /// Hard failures, one human-readable message each.
    pub errors: Vec<String>,
    /// Non-blocking observations.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors, warnings }
    }
}

/// Validate the structural constraints of a plugin manifest.
pub fn validate_manifest(manifest: &PluginManifest) -> ValidationReport {
    let mut errors = Vec::new();

    if manifest.id.is_empty() || manifest.id.len() > 50 {
        errors.push(format!(
            "id must be 1-50 characters, got {}",
            manifest.id.len()
        ));
    } else if !ID_PATTERN.is_match(&manifest.id) {
        errors.push(format!(
            "id `{}` must be lowercase alphanumeric with interior hyphens",
            manifest.id
        ));
    }

    if manifest.class_name.len() < 8 || manifest.class_name.len() > 100 {
        errors.push(format!(
            "className must be 8-100 characters, got {}",
            manifest.class_name.len()
        ));
    } else if !CLASS_NAME_PATTERN.is_match(&manifest.class_name) {
        errors.push(format!(
            "className `{}` must be PascalCase alphanumeric ending in `Plugin`",
            manifest.class_name
        ));
    }

    if !PACKAGE_NAME_PATTERN.is_match(&manifest.package_name) {
        errors.push(format!(
            "packageName `{}` is not a valid npm package name",
            manifest.package_name
        ));
    }

    if !SEMVER_PATTERN.is_match(&manifest.version) {
        errors.push(format!(
            "version `{}` is not a valid semantic version",
            manifest.version
        ));
    }

    if manifest.supported_data_types.is_empty() {
        errors.push("supportedDataTypes must not be empty".to_string());
    } else if manifest.supported_data_types.iter().any(|t| t.trim().is_empty()) {
        errors.push("supportedDataTypes must not contain blank entries".to_string());
    }

    ValidationReport::from_parts(errors, Vec::new())
}

/// Validate a live plugin instance's behavioral consistency.
///
/// Pure with respect to its input: two calls on an unmutated plugin
/// yield identical reports. Implemented-but-undeclared ingestors are
/// warnings rather than errors, favoring forward compatibility.
pub fn validate_plugin(plugin: &dyn Plugin) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if plugin.id().trim().is_empty() {
        errors.push("plugin id is empty".to_string());
    }
    if plugin.version().trim().is_empty() {
        errors.push("plugin version is empty".to_string());
    }
    if plugin.description().trim().is_empty() {
        errors.push("plugin description is empty".to_string());
    }

    let caps = plugin.capabilities();
    if !caps.any() {
        errors.push("plugin declares no ingestion method (file or api)".to_string());
    }

    if caps.file {
        if plugin.file_ingestor().is_none() {
            errors.push(
                "capability `file` is declared but no file ingestor is provided".to_string(),
            );
        }
        if caps.file_formats.as_ref().is_none_or(std::collections::BTreeSet::is_empty) {
            warnings.push("file ingestion is declared but no file formats are listed".to_string());
        }
    } else if plugin.file_ingestor().is_some() {
        warnings.push(
            "a file ingestor is implemented but the `file` capability is not declared".to_string(),
        );
    }

    if caps.api {
        match plugin.api_ingestor() {
            None => errors.push(
                "capability `api` is declared but no API ingestor is provided".to_string(),
            ),
            Some(ingestor) => {
                if ingestor.query_schema().is_none() {
                    warnings.push(
                        "API ingestion is declared but the ingestor publishes no query schema"
                            .to_string(),
                    );
                }
            }
        }
        if caps.api_endpoints.as_ref().is_none_or(std::collections::BTreeSet::is_empty) {
            warnings.push("API ingestion is declared but no endpoints are listed".to_string());
        }
    } else if plugin.api_ingestor().is_some() {
        warnings.push(
            "an API ingestor is implemented but the `api` capability is not declared".to_string(),
        );
    }

    ValidationReport::from_parts(errors, warnings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::IngestionCapabilities;
    use crate::plugin::{ApiIngestion, ApiIngestor, FileIngestor};
    use async_trait::async_trait;
    use quill_core::Bundle;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn make_manifest() -> PluginManifest {
        PluginManifest {
            id: "sales-events".to_string(),
            name: "Sales Events".to_string(),
            class_name: "SalesEventsPlugin".to_string(),
            package_name: "@quill/sales-events".to_string(),
            description: "Sales event feeds".to_string(),
            version: "1.2.0".to_string(),
            supported_data_types: vec!["events".to_string()],
        }
    }

    // --- validate_manifest: structural checks ---

    #[test]
    fn valid_manifest_passes() {
        let report = validate_manifest(&make_manifest());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn unscoped_package_name_accepted() {
        let mut manifest = make_manifest();
        manifest.package_name = "sales-events-plugin".to_string();
        assert!(validate_manifest(&manifest).valid);
    }

    #[test]
    fn empty_id_rejected() {
        let mut manifest = make_manifest();
        manifest.id = String::new();
        let report = validate_manifest(&manifest);
        assert!(!report.valid);
        assert!(report.errors.iter().any(|e| e.contains("1-50")));
    }

    #[test]
    fn overlong_id_rejected() {
        let mut manifest = make_manifest();
        manifest.id = "a".repeat(51);
        assert!(!validate_manifest(&manifest).valid);
    }

    #[test]
    fn uppercase_id_rejected() {
        let mut manifest = make_manifest();
        manifest.id = "SalesEvents".to_string();
        let report = validate_manifest(&manifest);
        assert!(report.errors.iter().any(|e| e.contains("lowercase")));
    }

    #[test]
    fn id_with_edge_hyphen_rejected() {
        for id in ["-sales", "sales-"] {
            let mut manifest = make_manifest();
            manifest.id = id.to_string();
            assert!(!validate_manifest(&manifest).valid, "id `{id}` should fail");
        }
    }

    #[test]
    fn single_char_id_accepted() {
        let mut manifest = make_manifest();
        manifest.id = "x".to_string();
        assert!(validate_manifest(&manifest).valid);
    }

    #[test]
    fn class_name_without_suffix_rejected() {
        let mut manifest = make_manifest();
        manifest.class_name = "SalesEventsSource".to_string();
        let report = validate_manifest(&manifest);
        assert!(report.errors.iter().any(|e| e.contains("Plugin")));
    }

    #[test]
    fn short_class_name_rejected() {
        let mut manifest = make_manifest();
        // 7 characters — below the 8 minimum even though the shape is right.
        manifest.class_name = "APlugin".to_string();
        let report = validate_manifest(&manifest);
        assert!(report.errors.iter().any(|e| e.contains("8-100")));
    }

    #[test]
    fn lowercase_class_name_rejected() {
        let mut manifest = make_manifest();
        manifest.class_name = "salesEventsPlugin".to_string();
        assert!(!validate_manifest(&manifest).valid);
    }

    #[test]
    fn bad_package_name_rejected() {
        for name in ["UPPER", "@Scope/pkg", "", " spaced"] {
            let mut manifest = make_manifest();
            manifest.package_name = name.to_string();
            let report = validate_manifest(&manifest);
            assert!(
                report.errors.iter().any(|e| e.contains("npm")),
                "package `{name}` should fail"
            );
        }
    }

    #[test]
    fn full_semver_accepted() {
        for version in ["0.1.0", "1.2.3", "2.0.0-rc.1", "1.0.0-alpha+build.17"] {
            let mut manifest = make_manifest();
            manifest.version = version.to_string();
            assert!(validate_manifest(&manifest).valid, "version `{version}` should pass");
        }
    }

    #[test]
    fn partial_semver_rejected() {
        for version in ["1.2", "1", "v1.2.3", "01.2.3", ""] {
            let mut manifest = make_manifest();
            manifest.version = version.to_string();
            assert!(!validate_manifest(&manifest).valid, "version `{version}` should fail");
        }
    }

    #[test]
    fn empty_data_types_rejected() {
        let mut manifest = make_manifest();
        manifest.supported_data_types.clear();
        let report = validate_manifest(&manifest);
        assert!(report.errors.iter().any(|e| e.contains("supportedDataTypes")));
    }

    #[test]
    fn blank_data_type_rejected() {
        let mut manifest = make_manifest();
        manifest.supported_data_types.push("  ".to_string());
        assert!(!validate_manifest(&manifest).valid);
    }

    #[test]
    fn manifest_failures_accumulate() {
        let mut manifest = make_manifest();
        manifest.id = "BAD".to_string();
        manifest.version = "1.2".to_string();
        manifest.supported_data_types.clear();
        let report = validate_manifest(&manifest);
        assert_eq!(report.errors.len(), 3);
    }

    // --- validate_plugin: behavioral checks ---

    struct StubFileIngestor;

    #[async_trait]
    impl FileIngestor for StubFileIngestor {
        async fn ingest_file(&self, _path: &Path) -> Result<Bundle, crate::errors::PluginError> {
            Ok(Bundle::new("stub", Vec::new()))
        }
    }

    struct StubApiIngestor {
        schema: Option<Value>,
    }

    #[async_trait]
    impl ApiIngestor for StubApiIngestor {
        async fn ingest_query(
            &self,
            _query: Value,
        ) -> Result<ApiIngestion, crate::errors::PluginError> {
            Ok(ApiIngestion { bundle: Bundle::new("stub", Vec::new()), api_metadata: None })
        }

        fn query_schema(&self) -> Option<Value> {
            self.schema.clone()
        }
    }

    struct TestPlugin {
        id: &'static str,
        version: &'static str,
        description: &'static str,
        caps: IngestionCapabilities,
        file: Option<StubFileIngestor>,
        api: Option<StubApiIngestor>,
    }

    impl TestPlugin {
        fn file_only() -> Self {
            Self {
                id: "file-plugin",
                version: "1.0.0",
                description: "file fixture",
                caps: IngestionCapabilities::file_only(["csv"]),
                file: Some(StubFileIngestor),
                api: None,
            }
        }
    }

    #[async_trait]
    impl Plugin for TestPlugin {
        fn id(&self) -> &str {
            self.id
        }
        fn version(&self) -> &str {
            self.version
        }
        fn description(&self) -> &str {
            self.description
        }
        fn capabilities(&self) -> IngestionCapabilities {
            self.caps.clone()
        }
        fn specifications(&self) -> HashMap<String, String> {
            HashMap::new()
        }
        fn prompts_dir(&self) -> PathBuf {
            PathBuf::from("/tmp/prompts")
        }
        fn templates_dir(&self) -> PathBuf {
            PathBuf::from("/tmp/templates")
        }
        fn file_ingestor(&self) -> Option<&dyn FileIngestor> {
            self.file.as_ref().map(|f| f as &dyn FileIngestor)
        }
        fn api_ingestor(&self) -> Option<&dyn ApiIngestor> {
            self.api.as_ref().map(|a| a as &dyn ApiIngestor)
        }
    }

    #[test]
    fn consistent_file_plugin_passes() {
        let report = validate_plugin(&TestPlugin::file_only());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn declared_file_without_ingestor_fails() {
        let mut plugin = TestPlugin::file_only();
        plugin.file = None;
        let report = validate_plugin(&plugin);
        assert!(!report.valid);
        assert!(
            report.errors.iter().any(|e| e.contains("file ingestor")),
            "errors should mention the file ingestor: {:?}",
            report.errors
        );
    }

    #[test]
    fn declared_api_without_ingestor_fails() {
        let mut plugin = TestPlugin::file_only();
        plugin.caps = IngestionCapabilities::api_only(["/v1/events"]);
        plugin.file = None;
        let report = validate_plugin(&plugin);
        assert!(report.errors.iter().any(|e| e.contains("API ingestor")));
    }

    #[test]
    fn no_capability_fails() {
        let mut plugin = TestPlugin::file_only();
        plugin.caps = IngestionCapabilities::default();
        plugin.file = None;
        let report = validate_plugin(&plugin);
        assert!(report.errors.iter().any(|e| e.contains("no ingestion method")));
    }

    #[test]
    fn undeclared_formats_warn() {
        let mut plugin = TestPlugin::file_only();
        plugin.caps = IngestionCapabilities { file: true, ..IngestionCapabilities::default() };
        let report = validate_plugin(&plugin);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.contains("file formats")));
    }

    #[test]
    fn implemented_but_undeclared_warns_not_errors() {
        let mut plugin = TestPlugin::file_only();
        plugin.api = Some(StubApiIngestor { schema: None });
        let report = validate_plugin(&plugin);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.contains("not declared")));
    }

    #[test]
    fn missing_query_schema_warns() {
        let mut plugin = TestPlugin::file_only();
        plugin.caps = IngestionCapabilities::api_only(["/v1/events"]);
        plugin.file = None;
        plugin.api = Some(StubApiIngestor { schema: None });
        let report = validate_plugin(&plugin);
        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.contains("query schema")));
    }

    #[test]
    fn api_with_schema_and_endpoints_is_clean() {
        let mut plugin = TestPlugin::file_only();
        plugin.caps = IngestionCapabilities::api_only(["/v1/events"]);
        plugin.file = None;
        plugin.api = Some(StubApiIngestor { schema: Some(json!({"type": "object"})) });
        let report = validate_plugin(&plugin);
        assert!(report.valid);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }

    #[test]
    fn empty_identity_fields_fail() {
        let mut plugin = TestPlugin::file_only();
        plugin.id = "";
        plugin.version = " ";
        plugin.description = "";
        let report = validate_plugin(&plugin);
        assert_eq!(
            report.errors.iter().filter(|e| e.contains("empty")).count(),
            3
        );
    }

    #[test]
    fn validation_is_pure() {
        let plugin = TestPlugin::file_only();
        let first = validate_plugin(&plugin);
        let second = validate_plugin(&plugin);
        assert_eq!(first, second);
    }
}

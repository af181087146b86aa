//! In-memory plugin catalog.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::capability::IngestionKind;
use crate::errors::RegistryError;
use crate::plugin::Plugin;
use crate::validator::validate_plugin;

/// Derived counts over the registered plugins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Plugins declaring only file ingestion.
    pub file_only: usize,
    /// Plugins declaring only API ingestion.
    pub api_only: usize,
    /// Plugins declaring both.
    pub hybrid: usize,
    /// Total registered plugins.
    pub total: usize,
}

/// Central catalog mapping plugin id to plugin instance.
///
/// The registry is the only structure shared across concurrent report
/// runs, so the catalog sits behind an `RwLock`. Duplicate ids are
/// rejected by [`register`](Self::register); hot-reload workflows that
/// want last-registration-wins go through
/// [`register_replacing`](Self::register_replacing) explicitly.
pub struct PluginRegistry {
    plugins: RwLock<HashMap<String, Arc<dyn Plugin>>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { plugins: RwLock::new(HashMap::new()) }
    }

    /// Register a plugin, rejecting duplicates.
    ///
    /// The plugin is validated first; on failure the catalog is left
    /// untouched and the itemized error list travels in the error.
    /// Validation warnings are surfaced through `tracing` and do not
    /// block registration.
    pub fn register(&self, plugin: Arc<dyn Plugin>) -> Result<(), RegistryError> {
        let id = self.validate_for_registration(plugin.as_ref())?;
        let mut plugins = self.plugins.write();
        if plugins.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        info!(plugin_id = %id, "plugin registered");
        let _ = plugins.insert(id, plugin);
        Ok(())
    }

    /// Register a plugin, replacing any existing entry with the same id.
    ///
    /// Returns the displaced instance, if there was one. Replacement is
    /// surfaced as a warning — it is expected during hot-reload
    /// development, suspicious in production.
    pub fn register_replacing(
        &self,
        plugin: Arc<dyn Plugin>,
    ) -> Result<Option<Arc<dyn Plugin>>, RegistryError> {
        let id = self.validate_for_registration(plugin.as_ref())?;
        let previous = self.plugins.write().insert(id.clone(), plugin);
        if previous.is_some() {
            warn!(plugin_id = %id, "existing plugin replaced");
        } else {
            info!(plugin_id = %id, "plugin registered");
        }
        Ok(previous)
    }

    fn validate_for_registration(&self, plugin: &dyn Plugin) -> Result<String, RegistryError> {
        let report = validate_plugin(plugin);
        let id = plugin.id().to_string();
        if !report.valid {
            return Err(RegistryError::Validation { id, report });
        }
        for warning in &report.warnings {
            warn!(plugin_id = %id, %warning, "plugin validation warning");
        }
        Ok(id)
    }

    /// Look up a plugin by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.read().get(id).cloned()
    }

    /// Whether a plugin with `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.plugins.read().contains_key(id)
    }

    /// Registered plugin ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.plugins.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    /// Remove a plugin, returning it if it was registered.
    pub fn unregister(&self, id: &str) -> Option<Arc<dyn Plugin>> {
        let removed = self.plugins.write().remove(id);
        if removed.is_some() {
            debug!(plugin_id = %id, "plugin unregistered");
        }
        removed
    }

    /// Remove every plugin.
    pub fn clear(&self) {
        self.plugins.write().clear();
    }

    /// Plugins whose live capabilities declare the given ingestion kind.
    ///
    /// Capabilities are queried on each scan, not cached, so a stateful
    /// plugin may answer differently between calls.
    pub fn find_by_capability(&self, kind: IngestionKind) -> Vec<Arc<dyn Plugin>> {
        self.plugins
            .read()
            .values()
            .filter(|p| p.capabilities().supports(kind))
            .cloned()
            .collect()
    }

    /// Plugins whose live capabilities accept the given file format.
    pub fn find_by_file_format(&self, format: &str) -> Vec<Arc<dyn Plugin>> {
        self.plugins
            .read()
            .values()
            .filter(|p| p.capabilities().supports_file_format(format))
            .cloned()
            .collect()
    }

    /// Derived capability counts over the catalog.
    pub fn stats(&self) -> RegistryStats {
        let plugins = self.plugins.read();
        let mut stats = RegistryStats { total: plugins.len(), ..RegistryStats::default() };
        for plugin in plugins.values() {
            let caps = plugin.capabilities();
            match (caps.file, caps.api) {
                (true, true) => stats.hybrid += 1,
                (true, false) => stats.file_only += 1,
                (false, true) => stats.api_only += 1,
                (false, false) => {}
            }
        }
        stats
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

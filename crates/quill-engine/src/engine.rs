//! The report engine — executes one generation request end to end.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use quill_llm::{GenerationClient, GenerationRequest, build_client};
use quill_plugin::PluginRegistry;
use quill_render::TemplateEngine;
use quill_spec::{VariableDef, parse_spec};

use crate::coerce::coerce_response;
use crate::context::GenerationContext;
use crate::errors::EngineError;
use crate::events::{EngineEvent, NoopObserver, ReportObserver};
use crate::report::{GeneratedReport, ReportMetadata, ReportRequest};
use crate::resolve::{binding_name, resolve_reference};

/// The generation orchestrator.
///
/// Owns the per-report execution sequence; shares nothing across runs
/// except the registry. Variables are generated strictly sequentially
/// in specification order — each may depend on anything declared before
/// it, so there is nothing safe to reorder.
pub struct ReportEngine {
    registry: Arc<PluginRegistry>,
    observer: Arc<dyn ReportObserver>,
}

impl ReportEngine {
    /// Engine over a shared plugin registry.
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry, observer: Arc::new(NoopObserver) }
    }

    /// Replace the progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ReportObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Execute a report request, constructing the generation client
    /// from the request's configuration.
    #[instrument(skip(self, request), fields(plugin_id = %request.plugin_id, spec_id = %request.spec_id))]
    pub async fn generate(&self, request: ReportRequest) -> Result<GeneratedReport, EngineError> {
        let client = build_client(&request.client)?;
        self.generate_with_client(
            &request.plugin_id,
            &request.spec_id,
            &request.bundle,
            client.as_ref(),
        )
        .await
    }

    /// Execute a report request against a caller-supplied client.
    ///
    /// Any I/O failure, specification parse failure, or client failure
    /// aborts the run with no partial output. The single absorbed
    /// failure is string-list coercion (see [`crate::coerce`]).
    pub async fn generate_with_client(
        &self,
        plugin_id: &str,
        spec_id: &str,
        bundle: &quill_core::Bundle,
        client: &dyn GenerationClient,
    ) -> Result<GeneratedReport, EngineError> {
        let plugin = self
            .registry
            .get(plugin_id)
            .ok_or_else(|| EngineError::PluginNotFound(plugin_id.to_string()))?;

        plugin
            .initialize()
            .await
            .map_err(|source| EngineError::PluginInit { id: plugin_id.to_string(), source })?;

        // Specification lookup happens before any file I/O.
        let specifications = plugin.specifications();
        let spec_source = specifications.get(spec_id).ok_or_else(|| EngineError::SpecNotFound {
            plugin_id: plugin_id.to_string(),
            spec_id: spec_id.to_string(),
        })?;
        let spec = parse_spec(spec_source)?;
        debug!(variables = spec.variables.len(), "specification parsed");

        self.emit(EngineEvent::RunStarted {
            plugin_id: plugin_id.to_string(),
            spec_id: spec_id.to_string(),
            variables: spec.variables.len(),
        });

        let prompts_dir = plugin.prompts_dir();
        let templates_dir = plugin.templates_dir();

        let mut ctx = GenerationContext::seed(bundle)?;
        let mut renderer = TemplateEngine::new();
        let total = spec.variables.len();

        for (index, variable) in spec.variables.iter().enumerate() {
            self.emit(EngineEvent::VariableStarted {
                name: variable.name.clone(),
                index,
                total,
            });

            let prompt_template = read_file(&prompts_dir.join(&variable.prompt_file)).await?;
            let prompt_context = build_prompt_context(&ctx, variable);
            let prompt = renderer.render_str(&prompt_template, &prompt_context)?;
            self.emit(EngineEvent::PromptRendered {
                name: variable.name.clone(),
                chars: prompt.len(),
            });

            let response = client.generate(GenerationRequest::new(prompt)).await?;

            let coercion = coerce_response(variable.kind, &response);
            if let Some(reason) = &coercion.fallback {
                warn!(variable = %variable.name, %reason, "coercion failed, keeping raw response");
                self.emit(EngineEvent::CoercionFallback {
                    name: variable.name.clone(),
                    reason: reason.clone(),
                });
            }
            self.emit(EngineEvent::VariableGenerated {
                name: variable.name.clone(),
                chars: response.len(),
            });
            ctx.insert_variable(&variable.name, coercion.value);
        }

        let template = read_file(&templates_dir.join(&spec.template_file)).await?;
        let content = renderer.render_str(&template, ctx.as_map())?.trim().to_string();
        self.emit(EngineEvent::TemplateRendered { chars: content.len() });

        let metadata = ReportMetadata {
            report_id: Uuid::now_v7(),
            plugin_id: plugin_id.to_string(),
            provider: client.provider().to_string(),
            model: client.model().to_string(),
            generated_at: Utc::now(),
            record_count: bundle.metadata.record_count,
            ingest_method: bundle.metadata.method.as_ref().map(|m| m.tag().to_string()),
        };

        info!(
            report_id = %metadata.report_id,
            variables = ctx.variable_count(),
            chars = content.len(),
            "report generated"
        );
        self.emit(EngineEvent::RunCompleted {
            plugin_id: plugin_id.to_string(),
            spec_id: spec_id.to_string(),
            variables: ctx.variable_count(),
        });

        Ok(GeneratedReport { content, metadata })
    }

    fn emit(&self, event: EngineEvent) {
        self.observer.on_event(&event);
    }
}

/// Build the rendering context for one variable's prompt.
///
/// Fixed base first (`bundle`, `stats`, `samples`, `metadata`), then
/// each declared input under its derived short name (absent references
/// bind null), and finally every previously generated variable — the
/// declared inputs are a naming hint, not an access-control boundary,
/// so later variables always see all earlier ones.
fn build_prompt_context(ctx: &GenerationContext, variable: &VariableDef) -> Map<String, Value> {
    let mut map = Map::new();
    let _ = map.insert("bundle".to_string(), ctx.bundle().clone());
    let _ = map.insert("stats".to_string(), ctx.stats().clone());
    let _ = map.insert("samples".to_string(), ctx.samples().clone());
    let _ = map.insert("metadata".to_string(), ctx.metadata().clone());

    for reference in &variable.inputs {
        let name = binding_name(reference);
        let value = resolve_reference(ctx, reference).unwrap_or(Value::Null);
        if value.is_null() {
            debug!(%reference, variable = %variable.name, "input reference resolved to nothing");
        }
        let _ = map.insert(name.to_string(), value);
    }

    for (name, value) in ctx.variables() {
        let _ = map.insert(name.to_string(), value.clone());
    }

    map
}

async fn read_file(path: &Path) -> Result<String, EngineError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| EngineError::Io { path: path.to_path_buf(), source })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

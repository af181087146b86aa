//! The template engine.

use std::path::Path;

use serde::Serialize;
use tera::Tera;

use crate::errors::RenderError;
use crate::filters;

/// Tera engine with the report filter set registered.
///
/// Templates are rendered one-off from strings rather than a
/// preloaded directory, because each report run loads its prompt and
/// template files from the selected plugin's own directories. Cheap to
/// construct; create one per report run.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Engine with all report filters registered.
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.register_filter("number_format", filters::number_format);
        tera.register_filter("fixed", filters::fixed);
        tera.register_filter("keys", filters::keys);
        tera.register_filter("top_entries", filters::top_entries);
        tera.register_filter("take", filters::take);
        Self { tera }
    }

    /// Render a template string against a serializable context.
    pub fn render_str<C: Serialize>(
        &mut self,
        template: &str,
        context: &C,
    ) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(context)?;
        Ok(self.tera.render_str(template, &ctx)?)
    }

    /// Read `relative` under `dir` and render it.
    pub fn render_file<C: Serialize>(
        &mut self,
        dir: &Path,
        relative: &str,
        context: &C,
    ) -> Result<String, RenderError> {
        let path = dir.join(relative);
        let template = std::fs::read_to_string(&path)
            .map_err(|source| RenderError::Io { path, source })?;
        self.render_str(&template, context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_plain_substitution() {
        let mut engine = TemplateEngine::new();
        let out = engine
            .render_str("Hello {{ name }}", &json!({"name": "quill"}))
            .unwrap();
        assert_eq!(out, "Hello quill");
    }

    #[test]
    fn renders_conditionals_and_loops() {
        let mut engine = TemplateEngine::new();
        let template = "{% if items %}{% for i in items %}- {{ i }}\n{% endfor %}{% else %}none{% endif %}";
        let out = engine.render_str(template, &json!({"items": ["a", "b"]})).unwrap();
        assert_eq!(out, "- a\n- b\n");
        let out = engine.render_str(template, &json!({"items": []})).unwrap();
        assert_eq!(out, "none");
    }

    #[test]
    fn custom_filters_are_registered() {
        let mut engine = TemplateEngine::new();
        let ctx = json!({
            "total": 1234567,
            "score": 0.8765,
            "stats": {"alpha": 1, "beta": 9},
            "tags": ["x", "y", "z"],
        });
        assert_eq!(engine.render_str("{{ total | number_format }}", &ctx).unwrap(), "1,234,567");
        assert_eq!(engine.render_str("{{ score | fixed }}", &ctx).unwrap(), "0.88");
        assert_eq!(
            engine.render_str("{{ stats | keys | join(sep=\",\") }}", &ctx).unwrap(),
            "alpha,beta"
        );
        assert_eq!(
            engine
                .render_str("{% for e in stats | top_entries(n=1) %}{{ e.key }}{% endfor %}", &ctx)
                .unwrap(),
            "beta"
        );
        assert_eq!(
            engine.render_str("{{ tags | take(n=2) | join(sep=\"-\") }}", &ctx).unwrap(),
            "x-y"
        );
    }

    #[test]
    fn null_values_render_empty() {
        let mut engine = TemplateEngine::new();
        let out = engine
            .render_str("[{{ absent }}]", &json!({"absent": null}))
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn syntax_error_is_template_error() {
        let mut engine = TemplateEngine::new();
        let err = engine.render_str("{% if %}", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }

    #[test]
    fn render_file_missing_path_is_io_error() {
        let mut engine = TemplateEngine::new();
        let err = engine
            .render_file(Path::new("/nonexistent"), "missing.md", &json!({}))
            .unwrap_err();
        match err {
            RenderError::Io { path, .. } => {
                assert!(path.ends_with("missing.md"));
            }
            other => panic!("expected io error, got {other}"),
        }
    }
}

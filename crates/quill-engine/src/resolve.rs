//! Dotted-path reference resolution.
//!
//! Input references are a small micro-language: `bundle.<path>` walks
//! property accesses from the bundle, `ctx.<path>` walks from the full
//! generation context (reaching prior variable outputs and the
//! bundle-derived aliases), and anything else is a direct whole-string
//! key lookup into the context. Missing intermediates resolve to an
//! absent value, never an error — callers bind those as null and let
//! templates tolerate them.

use serde_json::Value;

use crate::context::GenerationContext;

/// Resolve a reference against the context. `None` means the path (or
/// some intermediate of it) does not exist.
pub fn resolve_reference(ctx: &GenerationContext, reference: &str) -> Option<Value> {
    if let Some(path) = reference.strip_prefix("bundle.") {
        walk(ctx.bundle(), path)
    } else if let Some(path) = reference.strip_prefix("ctx.") {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let root = ctx.get(head)?;
        match rest {
            Some(rest) => walk(root, rest),
            None => Some(root.clone()),
        }
    } else {
        ctx.get(reference).cloned()
    }
}

/// Derive the short name a resolved input is bound under in the prompt
/// context: the second-to-last dotted segment when the reference has
/// more than two segments, else the last.
///
/// `bundle.samples.main` binds as `samples`; `ctx.summary_md` binds as
/// `summary_md`.
pub fn binding_name(reference: &str) -> &str {
    let segments: Vec<&str> = reference.split('.').collect();
    match segments.len() {
        0 | 1 | 2 => segments.last().copied().unwrap_or(reference),
        n => segments[n - 2],
    }
}

fn walk(root: &Value, path: &str) -> Option<Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current.clone())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Response coercion.
//!
//! The one failure the engine absorbs locally: a malformed string-list
//! response degrades to a single-element list of the trimmed raw text
//! instead of aborting the report, because one malformed field should
//! not cost the whole document. The caller surfaces the fallback as a
//! warning and keeps going.

use serde_json::Value;

use quill_core::fences::strip_code_fence;
use quill_spec::VariableKind;

/// A coerced response value, plus the fallback reason when string-list
/// parsing had to degrade.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    /// The value stored into the context.
    pub value: Value,
    /// Why the fallback fired, when it did.
    pub fallback: Option<String>,
}

/// Coerce a raw client response according to the variable's declared
/// kind.
pub fn coerce_response(kind: VariableKind, raw: &str) -> Coercion {
    match kind {
        VariableKind::Text | VariableKind::StructuredText => {
            Coercion { value: Value::String(raw.trim().to_string()), fallback: None }
        }
        VariableKind::StringList => coerce_string_list(raw),
    }
}

fn coerce_string_list(raw: &str) -> Coercion {
    let stripped = strip_code_fence(raw);
    match serde_json::from_str::<Value>(stripped) {
        Ok(Value::Array(items)) => Coercion { value: Value::Array(items), fallback: None },
        Ok(other) => fallback(raw, format!("expected a JSON array, got {}", kind_of(&other))),
        Err(err) => fallback(raw, format!("response is not valid JSON: {err}")),
    }
}

fn fallback(raw: &str, reason: String) -> Coercion {
    Coercion {
        value: Value::Array(vec![Value::String(raw.trim().to_string())]),
        fallback: Some(reason),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

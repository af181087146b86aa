//! Code-fence stripping for model output.
//!
//! Models asked for JSON frequently wrap it in a Markdown code fence,
//! optionally tagged `json`. [`strip_code_fence`] unwraps that before
//! structured parsing. Opening and closing markers are stripped
//! independently, so an unterminated fence still yields the body.

/// Strip an optional surrounding triple-backtick fence from `raw`.
///
/// Handles an optional `json`/`JSON` tag after the opening marker.
/// Input without fence markers is returned trimmed and otherwise
/// untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

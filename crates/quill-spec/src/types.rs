//! In-memory representation of a report specification.

use serde::{Deserialize, Serialize};

/// Declared type of a variable, governing response coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Free-form prose; the response is used verbatim (trimmed).
    #[serde(alias = "free_text")]
    Text,
    /// A JSON array of strings, possibly wrapped in a code fence.
    StringList,
    /// Markdown or other structured text; used verbatim (trimmed).
    #[serde(alias = "structured")]
    StructuredText,
}

/// One LLM-derived variable in a specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    /// Name the generated value is stored under in the context.
    pub name: String,
    /// Coercion type of the expected response.
    #[serde(rename = "type")]
    pub kind: VariableKind,
    /// Prompt template path, relative to the plugin's prompt directory.
    pub prompt_file: String,
    /// Dotted-path input references, each rooted at `bundle` or `ctx`.
    ///
    /// Inputs are advisory naming hints for prompt-context bindings, not
    /// an access-control boundary: every earlier variable stays visible
    /// to later prompts regardless of what is declared here.
    #[serde(default)]
    pub inputs: Vec<String>,
}

/// A parsed report specification: ordered variables plus the final
/// template reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSpec {
    /// Specification identifier (the key plugins expose it under).
    pub id: String,
    /// Final render template path, relative to the plugin's template
    /// directory.
    pub template_file: String,
    /// Variables in execution order.
    #[serde(default)]
    pub variables: Vec<VariableDef>,
}

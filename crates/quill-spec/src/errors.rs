//! Specification parsing errors.

use thiserror::Error;

/// Errors produced while parsing a specification document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The document was empty or contained only whitespace.
    #[error("specification document is empty")]
    Empty,

    /// The document parsed but carries no usable id.
    #[error("specification has an empty id")]
    MissingId,

    /// The document parsed but names no final template.
    #[error("specification `{id}` has an empty template_file")]
    MissingTemplate {
        /// Id of the offending specification.
        id: String,
    },

    /// A variable entry has no name.
    #[error("variable at position {index} has an empty name")]
    UnnamedVariable {
        /// Zero-based position in the variable list.
        index: usize,
    },

    /// The document is not well-formed YAML for the expected shape.
    #[error("malformed specification: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

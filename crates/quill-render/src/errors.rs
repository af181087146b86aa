//! Rendering errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or rendering a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template file could not be read.
    #[error("failed to read template at {path}: {source}")]
    Io {
        /// Path of the unreadable template.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template parsing or rendering failed.
    #[error("template render failed: {0}")]
    Template(#[from] tera::Error),
}

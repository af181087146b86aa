//! The generation-client contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// A single generation request: the rendered prompt plus an optional
/// per-request model override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Model override; the client's configured model applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Request with the client's default model.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), model: None }
    }

    /// Override the model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Contract every generation backend implements.
///
/// One prompt in, one string out. Any error is fatal to the report run
/// that issued the request; no retry happens at this layer.
#[async_trait]
pub trait GenerationClient: Send + Sync + std::fmt::Debug {
    /// Generate a completion for the request.
    async fn generate(&self, request: GenerationRequest) -> Result<String, ClientError>;

    /// Provider identifier (e.g. `openai`), recorded in report metadata.
    fn provider(&self) -> &str;

    /// Default model identifier, recorded in report metadata.
    fn model(&self) -> &str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

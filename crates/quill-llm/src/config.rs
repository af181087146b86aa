//! Client configuration and factory.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::GenerationClient;
use crate::errors::ClientError;
use crate::openai::OpenAiCompatClient;

/// Generation-client configuration supplied with each report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Provider id (`openai` or `openai-compatible`).
    pub provider: String,
    /// Model id passed to the endpoint.
    pub model: String,
    /// Bearer token. Required for `openai`; optional for self-hosted
    /// compatible endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override (e.g. a local inference server).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Max completion tokens override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerationConfig {
    /// Config for a hosted `openai` provider.
    pub fn openai(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: "openai".to_string(),
            model: model.into(),
            api_key: Some(api_key.into()),
            base_url: None,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Config for a self-hosted OpenAI-compatible endpoint.
    pub fn compatible(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            provider: "openai-compatible".to_string(),
            model: model.into(),
            api_key: None,
            base_url: Some(base_url.into()),
            max_tokens: None,
            temperature: None,
        }
    }
}

/// Build a generation client from configuration.
///
/// Unknown provider ids fail with [`ClientError::UnsupportedProvider`];
/// hosts with custom backends construct their client directly and skip
/// the factory.
pub fn build_client(config: &GenerationConfig) -> Result<Arc<dyn GenerationClient>, ClientError> {
    match config.provider.as_str() {
        "openai" | "openai-compatible" => {
            Ok(Arc::new(OpenAiCompatClient::new(config.clone())?))
        }
        other => Err(ClientError::UnsupportedProvider(other.to_string())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

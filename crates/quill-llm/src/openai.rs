//! OpenAI-compatible chat-completions client.
//!
//! Non-streaming: one POST to `{base_url}/chat/completions`, one
//! message back. Works against the hosted OpenAI API and any
//! compatible self-hosted endpoint (Bearer auth optional for the
//! latter).

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{GenerationClient, GenerationRequest};
use crate::config::GenerationConfig;
use crate::errors::ClientError;

/// Default base URL for the hosted OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Generation client for OpenAI-compatible chat-completions endpoints.
#[derive(Debug)]
pub struct OpenAiCompatClient {
    config: GenerationConfig,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Create a client from configuration.
    ///
    /// The hosted `openai` provider requires an API key; compatible
    /// self-hosted endpoints may omit it.
    pub fn new(config: GenerationConfig) -> Result<Self, ClientError> {
        if config.provider == "openai" && config.api_key.is_none() {
            return Err(ClientError::MissingApiKey(config.provider.clone()));
        }
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self { config, base_url, client: reqwest::Client::new() })
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_client(
        config: GenerationConfig,
        client: reqwest::Client,
    ) -> Result<Self, ClientError> {
        let mut built = Self::new(config)?;
        built.client = client;
        Ok(built)
    }

    fn build_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
                ClientError::MissingApiKey(self.config.provider.clone())
            })?;
            let _ = headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl GenerationClient for OpenAiCompatClient {
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn generate(&self, request: GenerationRequest) -> Result<String, ClientError> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage { role: "user", content: &request.prompt }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status: status.as_u16(), message });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(ClientError::EmptyResponse)?;

        debug!(chars = content.len(), "completion received");
        Ok(content)
    }

    fn provider(&self) -> &str {
        &self.config.provider
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

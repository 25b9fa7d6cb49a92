/// LLM Client — the single point of entry for all text-generator calls.
///
/// ARCHITECTURAL RULE: No other module may call the generator endpoint directly.
/// All outbound generation goes through this module.
///
/// The endpoint URL and model come from configuration; there is no ambient
/// global endpoint. Exactly one attempt is made per call (no retries).
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("generator reported an error: {0}")]
    Upstream(String),

    #[error("generator returned a mock response")]
    Mock,

    #[error("generator returned empty analysis")]
    EmptyContent,
}

/// Body POSTed to the generator endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
}

/// Body returned by the generator endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorResponse {
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub mock: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GeneratorResponse {
    /// Extracts the usable analysis text.
    ///
    /// An `error` field or `mock: true` is treated exactly like a transport
    /// failure, as is an analysis that is missing or blank.
    pub fn into_analysis(self) -> Result<String, LlmError> {
        if let Some(error) = self.error {
            return Err(LlmError::Upstream(error));
        }
        if self.mock.unwrap_or(false) {
            return Err(LlmError::Mock);
        }
        match self.analysis {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Anything that can turn a prompt into a generator response.
///
/// `EnrichmentService` holds an `Arc<dyn TextGenerator>` so the HTTP client
/// can be swapped for another backend or a test double.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratorResponse, LlmError>;
}

/// HTTP client for the configured generator endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
}

impl LlmClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratorResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the generator's own error message when it sent one
            let message = serde_json::from_str::<GeneratorResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GeneratorResponse = serde_json::from_str(&body)?;

        debug!(
            "Generator call succeeded: model={}, analysis_chars={}",
            request.model,
            parsed.analysis.as_deref().map(|a| a.chars().count()).unwrap_or(0)
        );

        Ok(parsed)
    }
}

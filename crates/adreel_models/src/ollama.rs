//! Ollama chat gateway with offline fallback.

use crate::mock_reply;
use adreel_config::GatewayConfig;
use adreel_core::{ChatMessage, PipelineMetrics};
use adreel_error::{AdreelResult, HttpError, ProviderError, ProviderErrorKind};
use adreel_interface::PromptGateway;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    options: ChatOptions,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Gateway to an Ollama `/api/chat` endpoint.
///
/// Connection failures and timeouts are answered with [`mock_reply`] so the
/// planner always gets text back. HTTP error statuses and unreadable bodies
/// are returned as [`ProviderError`]s.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: Client,
    url: String,
    model: String,
}

impl OllamaGateway {
    /// Creates a gateway for `model` at `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> AdreelResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::client_build("ollama", e))?;

        Ok(Self {
            client,
            url: url.into(),
            model: model.into(),
        })
    }

    /// Creates a gateway from the `[gateway]` configuration section.
    pub fn from_config(config: &GatewayConfig) -> AdreelResult<Self> {
        Self::new(&config.url, &config.model, config.timeout())
    }

    fn fallback(&self, messages: &[ChatMessage], error: &reqwest::Error) -> String {
        warn!(
            outcome = "mock_fallback",
            model = %self.model,
            error = %error,
            "Language model unreachable, answering with mock reply"
        );
        PipelineMetrics::get().record_gateway_fallback(&self.model);
        mock_reply(messages)
    }

    fn is_offline(error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }
}

#[async_trait]
impl PromptGateway for OllamaGateway {
    #[instrument(skip(self, messages), fields(model = %self.model, messages = messages.len()))]
    async fn send(&self, messages: &[ChatMessage], temperature: f32) -> AdreelResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            options: ChatOptions { temperature },
            stream: false,
        };

        debug!(url = %self.url, "Sending chat request");
        let start = Instant::now();
        let metrics = PipelineMetrics::get();

        let response = match self.client.post(&self.url).json(&request).send().await {
            Ok(response) => response,
            Err(e) if Self::is_offline(&e) => return Ok(self.fallback(messages, &e)),
            Err(e) => {
                metrics.record_gateway_error(&self.model, "request");
                return Err(ProviderError::new(ProviderErrorKind::Request(e.to_string())).into());
            }
        };

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            metrics.record_gateway_error(&self.model, "http_status");
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code,
                message,
            })
            .into());
        }

        let body: ChatResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Ok(self.fallback(messages, &e)),
            Err(e) => {
                metrics.record_gateway_error(&self.model, "malformed_response");
                return Err(
                    ProviderError::new(ProviderErrorKind::MalformedResponse(e.to_string())).into(),
                );
            }
        };

        let content = body
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| {
                metrics.record_gateway_error(&self.model, "missing_field");
                ProviderError::new(ProviderErrorKind::MissingField("message.content".to_string()))
            })?;

        let elapsed = start.elapsed().as_secs_f64();
        metrics.record_gateway_request(&self.model, elapsed);
        info!(
            outcome = "live",
            duration_secs = elapsed,
            chars = content.len(),
            "Received chat response"
        );
        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

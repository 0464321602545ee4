//! Chat-completion client for OpenAI-compatible APIs (Groq by default)

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::error::ClassifyError;
use super::request::{CompletionRequest, CompletionResult};
use crate::config::CompletionConfig;

/// Adapter to a remote completion service.
///
/// Implementations never panic or return early with an error: every failure
/// is folded into `CompletionResult::Failure`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn invoke(&self, request: &CompletionRequest) -> CompletionResult;
}

/// Groq API client for chat completions
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GroqClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ClassifyError> {
        let body = ChatRequest {
            model: &request.model,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(request.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(
            "Completion service answered {} in {:?}",
            status,
            started.elapsed()
        );

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Remote(remote_error_message(status, &error_text)));
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ClassifyError::Remote("malformed response: no message content".to_string())
            })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn invoke(&self, request: &CompletionRequest) -> CompletionResult {
        tracing::info!(
            "Requesting classification from {} ({} prompt bytes)",
            request.model,
            request.prompt.len()
        );

        let result = self.complete(request).await;
        if let Err(ref e) = result {
            tracing::warn!("Classification request failed: {}", e);
        }
        result.into()
    }
}

/// Prefer the service's own message; fall back to status plus raw body.
fn remote_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => format!("completion service error ({})", status),
        _ => format!("completion service error ({}): {}", status, body.trim()),
    }
}

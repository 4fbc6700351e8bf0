//! OpenAI Chat Completions Provider
//!
//! Sends one non-streaming `POST {base_url}/chat/completions` per call.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use expert_chat::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, TokenUsage,
};

use crate::config::Settings;

const COMPLETIONS_PATH: &str = "/chat/completions";

/// OpenAI implementation of LlmProvider
pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    url: String,
}

impl OpenAiProvider {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            url: format!(
                "{}{COMPLETIONS_PATH}",
                settings.base_url.trim_end_matches('/')
            ),
        })
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: false,
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::ExternalService(format!("Request timed out: {e}"))
            } else {
                DomainError::ExternalService(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            tracing::warn!("OpenAI API returned {}", status);
            return Err(map_http_error(status, &body));
        }

        parse_completion(&body, &self.model)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Helper Functions
// ============================================

fn parse_completion(body: &str, requested_model: &str) -> Result<CompletionResponse, DomainError> {
    let payload: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::MalformedResponse(format!("Invalid JSON: {e}")))?;

    let choice = payload
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::MalformedResponse("No choices returned".to_string()))?;

    let content = choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| DomainError::MalformedResponse("Choice has no content".to_string()))?;

    let usage = payload
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        model: payload.model.unwrap_or_else(|| requested_model.to_string()),
        usage,
        finish_reason: choice.finish_reason,
    })
}

fn map_http_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => DomainError::RateLimited(message),
        _ => DomainError::ExternalService(format!(
            "OpenAI API error ({}): {}",
            status.as_u16(),
            message
        )),
    }
}

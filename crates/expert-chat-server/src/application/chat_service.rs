//! Chat Application Service (Use Case)
//!
//! Composes the persona prompt and makes exactly one provider call.

use std::sync::Arc;

use expert_chat::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, Persona,
    PromptRequest,
};

/// Application service for persona chat
pub struct ChatService {
    provider: Arc<dyn LlmProvider>,
    options: CompletionOptions,
}

impl ChatService {
    pub fn new(provider: Arc<dyn LlmProvider>, temperature: f32) -> Self {
        Self {
            provider,
            options: CompletionOptions {
                temperature: Some(temperature),
                max_tokens: None,
            },
        }
    }

    /// Build the system + user messages for a persona
    pub fn compose(persona: Persona, user_text: &str) -> Vec<ChatMessage> {
        PromptRequest::new(persona, user_text).to_messages()
    }

    /// Generate a completion with full response metadata
    ///
    /// `user_text` must already have passed `validate_user_text`.
    pub async fn generate_completion(
        &self,
        user_text: &str,
        persona: Persona,
    ) -> Result<CompletionResponse, DomainError> {
        let messages = Self::compose(persona, user_text);

        tracing::info!(
            "Generating response as {} via {} ({})",
            persona.slug(),
            self.provider.provider_name(),
            self.provider.model_id()
        );

        let response = self
            .provider
            .complete(&messages, &self.options)
            .await
            .inspect_err(|e| tracing::warn!("Completion failed: {}", e))?;

        tracing::debug!(
            "Completion finished: {} tokens, finish_reason={:?}",
            response.usage.total_tokens,
            response.finish_reason
        );

        Ok(response)
    }

    /// Generate the response text for a persona key, returned unmodified
    pub async fn generate_response(
        &self,
        user_text: &str,
        persona_key: &str,
    ) -> Result<String, DomainError> {
        let persona: Persona = persona_key.parse()?;
        let response = self.generate_completion(user_text, persona).await?;
        Ok(response.content)
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub fn temperature(&self) -> f32 {
        self.options.temperature.unwrap_or_default()
    }
}

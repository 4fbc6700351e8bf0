//! In-process test doubles shared by unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use expert_chat::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, MessageRole,
    TokenUsage,
};

use crate::application::ChatService;
use crate::config::Settings;
use crate::{templates, AppState};

type Responder = Box<dyn Fn(&[ChatMessage]) -> Result<String, DomainError> + Send + Sync>;

/// Scripted provider that records every request it receives
pub struct MockProvider {
    responder: Responder,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
    last_options: Mutex<Option<CompletionOptions>>,
}

impl MockProvider {
    fn new(responder: Responder) -> Self {
        Self {
            responder,
            calls: Mutex::new(Vec::new()),
            last_options: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(Box::new(move |_| Ok(text.clone())))
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> DomainError + Send + Sync + 'static,
    {
        Self::new(Box::new(move |_| Err(make_error())))
    }

    /// Deterministic reply derived from the user message
    pub fn echo() -> Self {
        Self::new(Box::new(|messages| {
            let user = messages
                .iter()
                .find(|m| m.role == MessageRole::User)
                .map(|m| m.content.as_str())
                .unwrap_or_default();
            Ok(format!("echo: {user}"))
        }))
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_options(&self) -> Option<CompletionOptions> {
        self.last_options.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        *self.last_options.lock().unwrap() = Some(options.clone());

        let content = (self.responder)(messages)?;
        Ok(CompletionResponse {
            content,
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            },
            finish_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

/// Application state wired to a mock provider
pub fn state_with(provider: Arc<MockProvider>) -> AppState {
    let settings = Settings::default();
    AppState {
        chat: Arc::new(ChatService::new(provider, settings.temperature)),
        settings: Arc::new(settings),
        templates: Arc::new(templates::environment().unwrap()),
    }
}

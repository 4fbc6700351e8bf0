//! Chat - Request/Response DTOs

use chrono::{DateTime, Utc};
use expert_chat::{Persona, TokenUsage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Question or request text
    pub message: String,
    /// Persona key ("A" / "B"), label, or slug. Defaults to "A".
    pub persona: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Model reply, unmodified
    pub answer: String,
    pub persona: PersonaSummary,
    /// Model reported by the provider
    pub model: String,
    pub temperature: f32,
    pub usage: UsageResponse,
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// Token usage of one call
#[derive(Debug, Serialize, ToSchema)]
pub struct UsageResponse {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl From<TokenUsage> for UsageResponse {
    fn from(usage: TokenUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Persona summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonaSummary {
    pub key: String,
    pub label: String,
    pub slug: String,
    pub instruction: String,
}

impl From<Persona> for PersonaSummary {
    fn from(persona: Persona) -> Self {
        Self {
            key: persona.key().to_string(),
            label: persona.label().to_string(),
            slug: persona.slug().to_string(),
            instruction: persona.instruction().to_string(),
        }
    }
}

/// Active model settings (read-only)
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

/// Form submitted by the HTML page
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub persona: String,
}

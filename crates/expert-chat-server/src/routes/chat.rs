//! Chat Routes - LLM invocation with an expert persona

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;
use expert_chat::{validate_user_text, Persona};
use uuid::Uuid;

use super::error_response;
use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Ask the selected expert
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatResponse),
        (status = 400, description = "Empty message or unknown persona"),
        (status = 502, description = "Completion request failed")
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    // 1. Reject blank input before anything else
    validate_user_text(&payload.message).map_err(error_response)?;

    // 2. Resolve persona
    let persona = match payload.persona.as_deref() {
        Some(key) => key.parse::<Persona>().map_err(error_response)?,
        None => Persona::default(),
    };

    let request_id = Uuid::new_v4();
    tracing::info!("Chat request {} for {}", request_id, persona.slug());

    // 3. One completion call
    let response = state
        .chat
        .generate_completion(&payload.message, persona)
        .await
        .map_err(|e| {
            tracing::warn!("Chat request {} failed: {}", request_id, e);
            error_response(e)
        })?;

    Ok(Json(ChatResponse {
        answer: response.content,
        persona: persona.into(),
        model: response.model,
        temperature: state.chat.temperature(),
        usage: response.usage.into(),
        request_id,
        generated_at: Utc::now(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}

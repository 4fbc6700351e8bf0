//! Persona Routes - Read-only persona table and model captions

use axum::{extract::State, routing::get, Json, Router};
use expert_chat::Persona;

use crate::models::{ConfigResponse, PersonaSummary};
use crate::AppState;

/// List personas in selection order
#[utoipa::path(
    get,
    path = "/api/personas",
    responses(
        (status = 200, description = "Persona table", body = Vec<PersonaSummary>)
    ),
    tag = "Persona"
)]
pub async fn list_personas() -> Json<Vec<PersonaSummary>> {
    Json(Persona::ALL.into_iter().map(PersonaSummary::from).collect())
}

/// Active model settings
#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "Model and temperature in use", body = ConfigResponse)
    ),
    tag = "Persona"
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        provider: state.chat.provider_name().to_string(),
        model: state.settings.model.clone(),
        temperature: state.settings.temperature,
        timeout_secs: state.settings.timeout.as_secs(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/personas", get(list_personas))
        .route("/api/config", get(get_config))
}

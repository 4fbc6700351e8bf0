//! Expert Chat Routes
//!
//! - / - HTML page (persona radio, text area, answer / warning / error)
//! - /api/chat - JSON LLM invocation
//! - /api/personas - Persona table
//! - /api/config - Active model and temperature

use axum::http::StatusCode;
use expert_chat::DomainError;

pub mod chat;
pub mod page;
pub mod persona;
pub mod swagger;

/// Map a domain error to the status + message returned by JSON routes
pub(crate) fn error_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::EmptyInput | DomainError::UnknownPersona(_) => StatusCode::BAD_REQUEST,
        DomainError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Authentication(_)
        | DomainError::RateLimited(_)
        | DomainError::ExternalService(_)
        | DomainError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    };
    (status, err.to_string())
}

//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ConfigResponse, PersonaSummary, UsageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::chat,
        super::persona::list_personas,
        super::persona::get_config,
    ),
    info(
        title = "Expert Chat API",
        version = "0.1.0",
        description = "Ask an expert persona (English teacher / marketing consultant) backed by a hosted chat-completion model.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Chat", description = "Chat - single-shot LLM invocation"),
        (name = "Persona", description = "Persona - expert roles and model captions"),
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            UsageResponse,
            PersonaSummary,
            ConfigResponse,
        )
    )
)]
pub struct ApiDoc;

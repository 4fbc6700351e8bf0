use anyhow::Context;
use axum::{routing::get, Json, Router};
use minijinja::Environment;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod templates;

#[cfg(test)]
mod test_support;

use adapters::OpenAiProvider;
use application::ChatService;
use config::Settings;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub settings: Arc<Settings>,
    pub templates: Arc<Environment<'static>>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Expert Chat is running - the experts are listening".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::page::router())
        .merge(routes::chat::router())
        .merge(routes::persona::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🤖 Expert Chat initializing...");

    let settings = Settings::from_env().context("Invalid configuration")?;

    if settings.api_key.is_some() {
        tracing::info!("🔐 OPENAI_API_KEY loaded");
    } else {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - completion requests will be rejected upstream");
    }

    let provider = OpenAiProvider::new(&settings).context("Failed to create LLM provider")?;
    tracing::info!(
        "🧠 Model: {} / temperature: {} / timeout: {}s",
        settings.model,
        settings.temperature,
        settings.timeout.as_secs()
    );

    let chat = Arc::new(ChatService::new(Arc::new(provider), settings.temperature));
    let templates = Arc::new(templates::environment().context("Failed to load templates")?);
    let bind_addr = settings.bind_addr;

    let state = AppState {
        chat,
        settings: Arc::new(settings),
        templates,
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Expert Chat ready on http://{}", bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}

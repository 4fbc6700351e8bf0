//! Expert Chat API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Expert Chat
pub struct ExpertChatClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct PersonaResponse {
    pub key: String,
    pub label: String,
    pub slug: String,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct UsageResponse {
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub persona: PersonaResponse,
    pub model: String,
    pub temperature: f32,
    pub usage: UsageResponse,
    pub request_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ConfigResponse {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub persona: &'a str,
}

impl ExpertChatClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List personas in selection order
    pub async fn personas(&self) -> Result<Vec<PersonaResponse>> {
        let url = format!("{}/api/personas", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Expert Chat server")?;

        parse_json(resp).await
    }

    /// Show the server's model settings
    pub async fn config(&self) -> Result<ConfigResponse> {
        let url = format!("{}/api/config", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Expert Chat server")?;

        parse_json(resp).await
    }

    /// Ask the selected expert
    pub async fn chat(&self, message: &str, persona: &str) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest { message, persona })
            .send()
            .await
            .context("Failed to connect to Expert Chat server")?;

        parse_json(resp).await
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_chat_posts_message_and_persona() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(Matcher::Json(serde_json::json!({
                "message": "explain 'however'",
                "persona": "A"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "answer": "Sure, 'however' means...",
                    "persona": {"key": "A", "label": "A：英語教師", "slug": "english-teacher", "instruction": "..."},
                    "model": "gpt-4o-mini",
                    "temperature": 0.3,
                    "usage": {"prompt_tokens": 20, "completion_tokens": 7, "total_tokens": 27},
                    "request_id": "5f0c6a57-2f43-4b0e-9a47-51f8f8d0b1c2",
                    "generated_at": "2026-10-15T09:00:00Z"
                }"#,
            )
            .create_async()
            .await;

        let client = ExpertChatClient::new(&server.url());
        let reply = client.chat("explain 'however'", "A").await.unwrap();

        assert_eq!(reply.answer, "Sure, 'however' means...");
        assert_eq!(reply.persona.key, "A");
        assert_eq!(reply.usage.total_tokens, 27);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(502)
            .with_body("Authentication failed: Incorrect API key provided")
            .create_async()
            .await;

        let client = ExpertChatClient::new(&server.url());
        let err = client.chat("hello", "A").await.unwrap_err();

        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_personas_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/personas")
            .with_status(200)
            .with_body(
                r#"[
                    {"key": "A", "label": "A：英語教師", "slug": "english-teacher", "instruction": "a"},
                    {"key": "B", "label": "B：マーケティングコンサルタント", "slug": "marketing-consultant", "instruction": "b"}
                ]"#,
            )
            .create_async()
            .await;

        let client = ExpertChatClient::new(&format!("{}/", server.url()));
        let personas = client.personas().await.unwrap();

        assert_eq!(personas.len(), 2);
        assert_eq!(personas[1].slug, "marketing-consultant");
    }
}

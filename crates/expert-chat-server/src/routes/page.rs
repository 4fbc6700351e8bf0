//! Page Routes - HTML front-end
//!
//! GET renders the empty form. POST validates the text, asks the selected
//! expert once and renders the answer, a warning, or the error message.
//! The page stays usable after any failure.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use expert_chat::{validate_user_text, Persona};
use serde::Serialize;

use crate::models::PageForm;
use crate::templates::INDEX;
use crate::AppState;

pub const EMPTY_INPUT_WARNING: &str = "質問を入力してください。";

#[derive(Serialize)]
struct PersonaOption {
    key: &'static str,
    label: &'static str,
}

/// Everything the template needs
#[derive(Serialize)]
struct PageView {
    personas: Vec<PersonaOption>,
    selected: &'static str,
    user_input: String,
    model: String,
    temperature: String,
    warning: Option<&'static str>,
    error: Option<String>,
    answer: Option<String>,
}

impl PageView {
    fn new(state: &AppState, persona_key: &str, user_input: String) -> Self {
        let selected = persona_key
            .parse::<Persona>()
            .unwrap_or_default()
            .key();

        Self {
            personas: Persona::ALL
                .into_iter()
                .map(|p| PersonaOption {
                    key: p.key(),
                    label: p.label(),
                })
                .collect(),
            selected,
            user_input,
            model: state.settings.model.clone(),
            temperature: state.settings.temperature.to_string(),
            warning: None,
            error: None,
            answer: None,
        }
    }
}

fn render(state: &AppState, view: &PageView) -> Result<Html<String>, (StatusCode, String)> {
    state
        .templates
        .get_template(INDEX)
        .and_then(|template| template.render(view))
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let view = PageView::new(&state, Persona::default().key(), String::new());
    render(&state, &view)
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<PageForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut view = PageView::new(&state, &form.persona, form.user_input.clone());

    match validate_user_text(&form.user_input) {
        Err(_) => view.warning = Some(EMPTY_INPUT_WARNING),
        Ok(text) => match state.chat.generate_response(text, &form.persona).await {
            Ok(answer) => view.answer = Some(answer),
            Err(e) => {
                tracing::warn!("Page request failed: {}", e);
                view.error = Some(e.to_string());
            }
        },
    }

    render(&state, &view)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index).post(submit))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use expert_chat::DomainError;
    use tower::ServiceExt;

    use super::*;
    use crate::build_router;
    use crate::test_support::{state_with, MockProvider};

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn html(app: Router, request: Request<Body>) -> String {
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_shows_form_and_captions() {
        let app = build_router(state_with(Arc::new(MockProvider::replying("ok"))));
        let page = html(app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

        assert!(page.contains("LLM 専門家チャット"));
        assert!(page.contains("A：英語教師"));
        assert!(page.contains("B：マーケティングコンサルタント"));
        assert!(page.contains(r#"value="A" checked"#));
        assert!(page.contains("使用モデル: <code>gpt-4o-mini</code> / 温度: 0.3"));
        assert!(!page.contains("回答</h3>"));
    }

    #[tokio::test]
    async fn test_submit_renders_answer() {
        let provider = Arc::new(MockProvider::replying("Use numbered steps."));
        let app = build_router(state_with(provider.clone()));

        let page = html(app, post_form("user_input=plan+a+launch&persona=B")).await;

        assert!(page.contains("<h3>回答</h3>"));
        assert!(page.contains("Use numbered steps."));
        assert!(page.contains(r#"value="B" checked"#));
        assert_eq!(provider.calls()[0][1].content, "plan a launch");
    }

    #[tokio::test]
    async fn test_blank_submit_warns_without_call() {
        let provider = Arc::new(MockProvider::replying("never"));
        let app = build_router(state_with(provider.clone()));

        let page = html(app, post_form("user_input=+%0A+&persona=A")).await;

        assert!(page.contains(EMPTY_INPUT_WARNING));
        assert!(!page.contains("<h3>回答</h3>"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_displayed_and_page_survives() {
        let provider = Arc::new(MockProvider::failing(|| {
            DomainError::Authentication("Incorrect API key provided".to_string())
        }));
        let state = state_with(provider.clone());

        let page = html(
            build_router(state.clone()),
            post_form("user_input=hello&persona=A"),
        )
        .await;
        assert!(page.contains("エラーが発生しました：Authentication failed: Incorrect API key provided"));

        // Still serving after the failure
        let page = html(
            build_router(state),
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;
        assert!(page.contains("送信"));
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_leading_newline_survives_redisplay() {
        let provider = Arc::new(MockProvider::failing(|| {
            DomainError::ExternalService("down".to_string())
        }));
        let app = build_router(state_with(provider.clone()));

        let page = html(app, post_form("user_input=%0Ahello&persona=A")).await;

        // Browsers drop the first newline after <textarea>
        assert!(page.contains("例：この英文をやさしく解説して\">\n\nhello</textarea>"));
        assert_eq!(provider.calls()[0][1].content, "\nhello");
    }

    #[tokio::test]
    async fn test_answer_is_html_escaped() {
        let provider = Arc::new(MockProvider::replying("<script>alert(1)</script>"));
        let app = build_router(state_with(provider));

        let page = html(app, post_form("user_input=hi&persona=A")).await;

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}

//! Story HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{GenerateRandomPrompt, GenerateStory};
use crate::domain::story::{StoryDraft, StoryRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 随机创意响应
#[derive(Debug, Serialize)]
pub struct RandomPromptBody {
    pub prompt: String,
}

/// 生成故事
///
/// 请求体字段全部可选（length/tone 取默认值）；
/// 无法反序列化的请求体（含非法枚举值）按 400 拒绝，不做静默纠正。
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> Result<Json<StoryDraft>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    tracing::info!(
        length = %request.length,
        tone = %request.tone,
        "Received request for /generate-story"
    );

    let draft = state
        .generate_story_handler
        .handle(GenerateStory { request })
        .await?;

    Ok(Json(draft))
}

/// 生成随机创意（空请求体）
pub async fn generate_random_prompt(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RandomPromptBody>, ApiError> {
    tracing::info!("Received request for /generate-random-prompt");

    let response = state
        .random_prompt_handler
        .handle(GenerateRandomPrompt)
        .await?;

    Ok(Json(RandomPromptBody {
        prompt: response.prompt,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GeneratorError;
    use crate::infrastructure::adapters::FakeGenAiClient;
    use crate::infrastructure::http::routes::create_routes;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn router_with(generator: FakeGenAiClient) -> axum::Router {
        let state = Arc::new(AppState::new(Arc::new(generator)));
        create_routes().with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_story_returns_title_and_story() {
        let app = router_with(FakeGenAiClient::with_defaults());
        let request = post_json("/generate-story", r#"{"prompt": "A lone astronaut"}"#);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["title"], "The Fixed Story");
        assert_eq!(json["story"], "Once there was a test.");
    }

    #[tokio::test]
    async fn test_generate_story_with_blank_fields_is_400() {
        let app = router_with(FakeGenAiClient::with_defaults());
        let request = post_json("/generate-story", r#"{"prompt": "   "}"#);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("At least one"));
    }

    #[tokio::test]
    async fn test_generate_story_with_invalid_tone_is_400() {
        let app = router_with(FakeGenAiClient::with_defaults());
        let request = post_json(
            "/generate-story",
            r#"{"prompt": "x", "tone": "melancholic"}"#,
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_429_is_propagated_with_message() {
        let app = router_with(FakeGenAiClient::failing(|| GeneratorError::Upstream {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        }));
        let request = post_json("/generate-story", r#"{"prompt": "x"}"#);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Resource has been exhausted");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_500() {
        let app = router_with(FakeGenAiClient::failing(|| GeneratorError::MissingApiKey));
        let request = post_json("/generate-story", r#"{"prompt": "x"}"#);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_empty_model_content_is_500_with_message() {
        let app = router_with(FakeGenAiClient::failing(|| GeneratorError::EmptyResponse));
        let request = post_json("/generate-story", r#"{"prompt": "x"}"#);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "No story generated by AI.");
    }

    #[tokio::test]
    async fn test_random_prompt_with_empty_body() {
        let app = router_with(FakeGenAiClient::with_defaults());
        let request = Request::builder()
            .method("POST")
            .uri("/generate-random-prompt")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["prompt"].as_str().unwrap().contains("cartographer"));
    }

    #[tokio::test]
    async fn test_ping() {
        let app = router_with(FakeGenAiClient::with_defaults());
        let request = Request::builder()
            .uri("/ping")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }
}

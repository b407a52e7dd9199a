//! Fake GenAI Client - 用于测试的生成客户端
//!
//! 不实际调用外部服务：schema 约束的请求返回固定的故事 JSON，
//! 纯文本请求返回固定的创意文本

use async_trait::async_trait;

use crate::application::ports::{
    GenerateRequest, GenerateResponse, GeneratorError, TextGeneratorPort,
};

/// Fake GenAI Client 配置
#[derive(Debug, Clone)]
pub struct FakeGenAiClientConfig {
    /// schema 约束请求返回的 JSON 文本
    pub story_json: String,
    /// 纯文本请求返回的文本
    pub prompt_text: String,
}

impl Default for FakeGenAiClientConfig {
    fn default() -> Self {
        Self {
            story_json: r#"{"title": "The Fixed Story", "story": "Once there was a test."}"#
                .to_string(),
            prompt_text: "A cartographer who maps places that do not exist yet.".to_string(),
        }
    }
}

/// Fake GenAI Client
///
/// 可选地以固定错误响应所有请求（failure 优先于固定文本）
pub struct FakeGenAiClient {
    config: FakeGenAiClientConfig,
    failure: Option<fn() -> GeneratorError>,
}

impl FakeGenAiClient {
    pub fn new(config: FakeGenAiClientConfig) -> Self {
        Self {
            config,
            failure: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeGenAiClientConfig::default())
    }

    /// 所有请求都返回指定错误
    pub fn failing(failure: fn() -> GeneratorError) -> Self {
        Self {
            config: FakeGenAiClientConfig::default(),
            failure: Some(failure),
        }
    }
}

#[async_trait]
impl TextGeneratorPort for FakeGenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GeneratorError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }

        tracing::debug!(
            prompt_len = request.prompt.len(),
            constrained = request.response_schema.is_some(),
            "FakeGenAiClient: returning fixed text"
        );

        let text = if request.response_schema.is_some() {
            self.config.story_json.clone()
        } else {
            self.config.prompt_text.clone()
        };

        Ok(GenerateResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_client_distinguishes_schema_requests() {
        let client = FakeGenAiClient::with_defaults();

        let story = client
            .generate(GenerateRequest::with_schema("p", serde_json::json!({})))
            .await
            .unwrap();
        assert!(story.text.contains("The Fixed Story"));

        let prompt = client
            .generate(GenerateRequest::plain_text("p"))
            .await
            .unwrap();
        assert!(prompt.text.contains("cartographer"));
    }

    #[tokio::test]
    async fn test_fake_client_failure_mode() {
        let client = FakeGenAiClient::failing(|| GeneratorError::EmptyResponse);
        let result = client.generate(GenerateRequest::plain_text("p")).await;
        assert!(matches!(result, Err(GeneratorError::EmptyResponse)));
    }
}

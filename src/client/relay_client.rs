//! Relay Client - 客户端到中继的 HTTP 调用
//!
//! 定义中继接口的抽象（便于测试替身）与 reqwest 实现。
//! 不重试：一次失败即对本次操作终结，由 UI 呈现。

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::story::{StoryDraft, StoryRequest};

/// 中继调用错误
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// 中继返回的业务错误（状态码 + 消息，消息直接面向用户）
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 连接层失败；对用户只给通用的连通性提示
    #[error("Something went wrong while contacting the story service. Ensure the relay is running.")]
    Network(String),

    #[error("Request timed out. Please try again.")]
    Timeout,

    /// 中继返回了无法解析的内容
    #[error("Unexpected response from the story service.")]
    InvalidResponse(String),
}

/// 中继接口抽象
#[async_trait]
pub trait RelayApi: Send + Sync {
    /// POST /generate-story
    async fn generate_story(&self, request: &StoryRequest) -> Result<StoryDraft, RelayError>;

    /// POST /generate-random-prompt
    async fn generate_random_prompt(&self) -> Result<String, RelayError>;
}

/// 中继错误响应体 {"error": "..."}
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 随机创意响应体
#[derive(Debug, Deserialize)]
struct PromptBody {
    prompt: String,
}

/// HTTP 中继客户端配置
#[derive(Debug, Clone)]
pub struct HttpRelayClientConfig {
    /// 中继基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpRelayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpRelayClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 中继客户端
pub struct HttpRelayClient {
    client: Client,
    config: HttpRelayClientConfig,
}

impl HttpRelayClient {
    pub fn new(config: HttpRelayClientConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RelayError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn map_send_error(e: reqwest::Error) -> RelayError {
        if e.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Network(e.to_string())
        }
    }

    /// 非成功响应转为 Api 错误，尽力提取 {"error": "..."} 消息
    async fn to_api_error(response: reqwest::Response) -> RelayError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "Failed to fetch from the story service.".to_string());
        RelayError::Api { status, message }
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn generate_story(&self, request: &StoryRequest) -> Result<StoryDraft, RelayError> {
        let response = self
            .client
            .post(self.url("/generate-story"))
            .json(request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::to_api_error(response).await);
        }

        response
            .json::<StoryDraft>()
            .await
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))
    }

    async fn generate_random_prompt(&self) -> Result<String, RelayError> {
        let response = self
            .client
            .post(self.url("/generate-random-prompt"))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::to_api_error(response).await);
        }

        let body: PromptBody = response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        Ok(body.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpRelayClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_url_building() {
        let client =
            HttpRelayClient::new(HttpRelayClientConfig::new("http://relay:9000")).unwrap();
        assert_eq!(client.url("/generate-story"), "http://relay:9000/generate-story");
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let error = RelayError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(error.to_string(), "quota exceeded");
    }

    #[test]
    fn test_network_error_display_is_generic() {
        let error = RelayError::Network("tcp connect error 10.0.0.1:3001".to_string());
        assert!(!error.to_string().contains("10.0.0.1"));
    }
}

//! HTTP GenAI Client - 调用外部 generateContent 服务
//!
//! 实现 TextGeneratorPort trait，通过 HTTP 调用 Gemini 风格的生成接口
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent?key={api_key}
//! Request: {"contents": [{"role": "user", "parts": [{"text": "..."}]}], "generationConfig": {...}}
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    GenerateRequest, GenerateResponse, GeneratorError, TextGeneratorPort,
};

// ============================================================================
// 线上格式
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// 上游错误响应格式 {"error": {"message": "..."}}
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

// ============================================================================
// 客户端
// ============================================================================

/// HTTP GenAI 客户端配置
#[derive(Debug, Clone)]
pub struct HttpGenAiClientConfig {
    /// 生成服务基础 URL
    pub base_url: String,
    /// 模型名
    pub model: String,
    /// API 凭证；None 表示未配置
    pub api_key: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpGenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            timeout_secs: 120,
        }
    }
}

impl HttpGenAiClientConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP GenAI 客户端
pub struct HttpGenAiClient {
    client: Client,
    config: HttpGenAiClientConfig,
}

impl HttpGenAiClient {
    /// 创建新的客户端
    pub fn new(config: HttpGenAiClientConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 生成接口 URL（不含凭证）
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl TextGeneratorPort for HttpGenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GeneratorError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: request.response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let url = self.generate_url();
        tracing::debug!(
            url = %url,
            constrained = body.generation_config.is_some(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else if e.is_connect() {
                    GeneratorError::NetworkError(format!(
                        "Cannot connect to generation service: {}",
                        e
                    ))
                } else {
                    GeneratorError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // 尽力提取上游错误消息，提取不到则给兜底文本
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Failed to fetch content from AI.".to_string());

            return Err(GeneratorError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(GeneratorError::EmptyResponse)?;

        tracing::info!(text_len = text.len(), "Generation completed");

        Ok(GenerateResponse { text })
    }
}

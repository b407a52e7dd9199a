//! Text Generator Port - 生成模型抽象
//!
//! 定义对外部文本生成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 生成错误
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// 未配置 API 凭证：进程级配置问题，对外只报告服务器配置错误
    #[error("Server configuration error: API key missing")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游服务以非成功状态拒绝调用
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// 上游调用成功但没有可用内容
    #[error("No content generated by upstream model")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 生成请求
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// 单轮对话中唯一的一条用户消息
    pub prompt: String,
    /// 期望的 JSON 响应 schema；None 表示返回纯文本
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// 纯文本生成请求
    pub fn plain_text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    /// 带 schema 约束的 JSON 生成请求
    pub fn with_schema(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// 生成响应
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// 模型返回的原始文本（schema 约束时为 JSON 文本）
    pub text: String,
}

/// Text Generator Port
///
/// 外部生成模型服务的抽象接口
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 执行一次单轮生成
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GeneratorError>;
}

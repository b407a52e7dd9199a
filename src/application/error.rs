//! 应用层错误定义
//!
//! 统一的命令处理错误类型

use thiserror::Error;

use crate::application::ports::GeneratorError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 凭证缺失：对外不暴露凭证细节
    #[error("Server configuration error: API key missing")]
    MissingCredential,

    /// 上游服务错误（保留上游状态码与消息）
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// 上游成功但无可用内容
    #[error("{0}")]
    EmptyResult(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<GeneratorError> for ApplicationError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::MissingApiKey => Self::MissingCredential,
            GeneratorError::Upstream { status, message } => Self::Upstream { status, message },
            GeneratorError::EmptyResponse => {
                Self::EmptyResult("No content generated by AI.".to_string())
            }
            GeneratorError::NetworkError(msg) => Self::InternalError(msg),
            GeneratorError::Timeout => Self::InternalError("Upstream request timed out".to_string()),
            GeneratorError::InvalidResponse(msg) => Self::InternalError(msg),
        }
    }
}

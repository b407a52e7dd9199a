//! HTTP Error Handling
//!
//! 每个失败映射为一个带人类可读消息的 HTTP 错误响应，格式 {"error": "..."}。
//! 上游错误保留其原始状态码；其余默认 500。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无效或违反校验规则
    BadRequest(String),
    /// 服务端配置问题（不暴露凭证细节）
    Configuration(String),
    /// 上游服务失败，状态码原样透传
    Upstream { status: u16, message: String },
    /// 内部错误
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Configuration(msg) => {
                tracing::error!(error = %msg, "Server configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Upstream { status, message } => {
                tracing::warn!(status = status, error = %message, "Upstream error");
                (
                    StatusCode::from_u16(status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message,
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::MissingCredential => {
                ApiError::Configuration("Server configuration error: API key missing.".to_string())
            }
            ApplicationError::Upstream { status, message } => {
                ApiError::Upstream { status, message }
            }
            ApplicationError::EmptyResult(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_upstream_status_is_propagated() {
        let error = ApiError::Upstream {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_unmappable_upstream_status_defaults_to_500() {
        let error = ApiError::Upstream {
            status: 0,
            message: "broken".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_credential_maps_to_500_without_detail() {
        let error: ApiError = ApplicationError::MissingCredential.into();
        match &error {
            ApiError::Configuration(msg) => {
                assert!(!msg.to_lowercase().contains("gemini"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error: ApiError = ApplicationError::validation("empty request").into();
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

//! HTTP Middleware
//!
//! 4xx/5xx 响应日志中间件。业务错误的细节在 ApiError::into_response() 中记录，
//! 这里补充方法、路径与状态码。

use axum::{extract::Request, middleware::Next, response::Response};

/// 错误状态码日志中间件
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

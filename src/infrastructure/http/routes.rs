//! HTTP Routes
//!
//! API Endpoints:
//! - /generate-story          POST  生成故事（StoryRequest JSON）
//! - /generate-random-prompt  POST  生成随机创意（空请求体）
//! - /ping                    GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-story", post(handlers::generate_story))
        .route(
            "/generate-random-prompt",
            post(handlers::generate_random_prompt),
        )
        .route("/ping", get(handlers::ping))
}

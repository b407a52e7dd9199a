//! Fabula - AI 故事生成中继
//!
//! 无状态中继：把结构化的故事参数整形为提示词，转发给外部生成模型，
//! 校验并解包其响应后以规范化 JSON 返回。

use std::sync::Arc;

use fabula::config::{load_config, print_config};
use fabula::infrastructure::adapters::{HttpGenAiClient, HttpGenAiClientConfig};
use fabula::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},fabula={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Fabula - AI 故事生成中继");
    print_config(&config);

    if config
        .genai
        .api_key
        .as_deref()
        .map_or(true, |k| k.is_empty())
    {
        tracing::warn!("GEMINI_API_KEY is not set; story requests will fail with a server configuration error");
    }

    // 创建生成模型客户端
    let genai_config = HttpGenAiClientConfig {
        base_url: config.genai.base_url.clone(),
        model: config.genai.model.clone(),
        api_key: config.genai.api_key.clone(),
        timeout_secs: config.genai.timeout_secs,
    };
    let generator = Arc::new(
        HttpGenAiClient::new(genai_config)
            .map_err(|e| anyhow::anyhow!("Failed to create GenAI client: {}", e))?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(generator);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

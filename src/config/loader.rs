//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `GEMINI_API_KEY` 环境变量（惯用的凭证注入方式）
//! 2. 环境变量（前缀 `FABULA_`，层级分隔符 `__`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `FABULA_SERVER__PORT=8080`
/// - `FABULA_GENAI__MODEL=gemini-2.0-flash`
/// - `FABULA_CLIENT__RELAY_URL=http://relay:3001`
/// - `GEMINI_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3001)?
        .set_default("genai.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("genai.model", "gemini-2.0-flash")?
        .set_default("genai.timeout_secs", 120)?
        .set_default("client.relay_url", "http://localhost:3001")?
        .set_default("client.storage_path", "data/stories.sled")?
        .set_default("client.timeout_secs", 120)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: FABULA_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("FABULA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 凭证的惯用环境变量（最高优先级，覆盖其他来源）
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            builder = builder.set_override("genai.api_key", key)?;
        }
    }

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.genai.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "GenAI base URL cannot be empty".to_string(),
        ));
    }

    if config.genai.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "GenAI model cannot be empty".to_string(),
        ));
    }

    if config.client.relay_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Relay URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志；不打印凭证本身）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("GenAI URL: {}", config.genai.base_url);
    tracing::info!("GenAI Model: {}", config.genai.model);
    tracing::info!("GenAI Timeout: {}s", config.genai.timeout_secs);
    tracing::info!(
        "API Key configured: {}",
        config.genai.api_key.as_deref().is_some_and(|k| !k.is_empty())
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 生成模型配置
    #[serde(default)]
    pub genai: GenAiConfig,

    /// 客户端配置
    #[serde(default)]
    pub client: ClientConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 生成模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct GenAiConfig {
    /// 生成服务基础 URL
    #[serde(default = "default_genai_base_url")]
    pub base_url: String,

    /// 模型名
    #[serde(default = "default_genai_model")]
    pub model: String,

    /// API 凭证；未配置时服务仍可启动，请求按配置错误报告
    #[serde(default)]
    pub api_key: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_genai_timeout")]
    pub timeout_secs: u64,
}

fn default_genai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_genai_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_genai_timeout() -> u64 {
    120
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_genai_base_url(),
            model: default_genai_model(),
            api_key: None,
            timeout_secs: default_genai_timeout(),
        }
    }
}

/// 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// 中继服务地址
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// 故事存储路径
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// 中继请求超时时间（秒）
    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,
}

fn default_relay_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_storage_path() -> String {
    "data/stories.sled".to_string()
}

fn default_client_timeout() -> u64 {
    120
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            storage_path: default_storage_path(),
            timeout_secs: default_client_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.genai.model, "gemini-2.0-flash");
        assert!(config.genai.api_key.is_none());
        assert_eq!(config.client.relay_url, "http://localhost:3001");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3001");
    }
}

//! Fabula - AI 故事生成系统
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事请求/结果、长度与基调枚举、提示词构建
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextGenerator, StoryStore）
//! - Commands: 命令处理器（GenerateStory, GenerateRandomPrompt）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 中继的 RESTful API
//! - Adapters: GenAI Client（Gemini generateContent）
//! - Persistence: Sled 故事存储
//!
//! 客户端 (client/):
//! - 显式状态结构体 + 纯状态转移 + 中继调用编排

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

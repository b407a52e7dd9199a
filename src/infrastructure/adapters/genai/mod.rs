//! GenAI 适配器 - 外部文本生成服务客户端

mod fake_genai_client;
mod http_genai_client;

pub use fake_genai_client::{FakeGenAiClient, FakeGenAiClientConfig};
pub use http_genai_client::{HttpGenAiClient, HttpGenAiClientConfig};

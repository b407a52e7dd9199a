//! Client Component - 客户端
//!
//! - state: 显式状态结构体 + 纯状态转移
//! - relay_client: 中继接口抽象与 reqwest 实现
//! - session: 状态、存储与中继调用的编排

pub mod relay_client;
pub mod session;
pub mod state;

pub use relay_client::{HttpRelayClient, HttpRelayClientConfig, RelayApi, RelayError};
pub use session::{SaveOutcome, StorySession};
pub use state::ClientState;

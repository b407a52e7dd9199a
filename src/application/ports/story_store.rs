//! Story Store Port - 已保存故事的持久化抽象
//!
//! 持久化列表是已保存故事的唯一事实来源：启动时整体读入，
//! 每次增删后整体写回。访问是同步的（客户端单线程驱动，无并发写者）。

use thiserror::Error;

use crate::domain::story::SavedStory;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Story Store Port
pub trait StoryStorePort: Send + Sync {
    /// 读出完整的故事列表（按保存顺序）
    fn load_all(&self) -> Result<Vec<SavedStory>, StoreError>;

    /// 整体写回故事列表
    fn save_all(&self, stories: &[SavedStory]) -> Result<(), StoreError>;
}

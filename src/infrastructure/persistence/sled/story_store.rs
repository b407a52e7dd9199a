//! Sled-based Story Store Implementation
//!
//! 已保存故事的持久化实现：固定键下存放 JSON 编码的有序列表。
//! 列表整体读、整体写，与客户端单次用户操作的读-改-写节奏一致。

use sled::Db;

use crate::application::ports::{StoreError, StoryStorePort};
use crate::domain::story::SavedStory;

/// 固定存储键
///
/// 键下的值是 JSON 编码的 `Vec<SavedStory>`，这是唯一需要保持兼容的落盘格式。
const STORIES_KEY: &str = "saved_stories";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/stories.sled".to_string(),
        }
    }
}

/// Sled 故事存储
pub struct SledStoryStore {
    db: Db,
}

impl SledStoryStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db =
            sled::open(&config.db_path).map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledStoryStore initialized");

        Ok(Self { db })
    }

    /// 打开指定路径的存储
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }
}

impl StoryStorePort for SledStoryStore {
    fn load_all(&self) -> Result<Vec<SavedStory>, StoreError> {
        match self.db.get(STORIES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::SerializationError(e.to_string())),
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    fn save_all(&self, stories: &[SavedStory]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(stories)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        self.db
            .insert(STORIES_KEY, bytes)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(count = stories.len(), "Saved stories written");

        Ok(())
    }
}

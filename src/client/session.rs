//! Client Session - 状态、存储与中继调用的编排
//!
//! 每个用户操作对应一次同步的读-改-写：先写回存储成功，
//! 再更新内存中的视图，保证持久化列表始终是唯一事实来源。

use std::sync::Arc;

use crate::application::ports::{StoreError, StoryStorePort};
use crate::client::relay_client::RelayApi;
use crate::client::state::ClientState;
use crate::domain::story::{SavedStory, StoryId};

/// 保存结果
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 已追加到持久化列表
    Saved(StoryId),
    /// 当前没有可保存的结果（用户可见提示）
    NothingToSave,
}

/// 客户端会话
pub struct StorySession {
    state: ClientState,
    relay: Arc<dyn RelayApi>,
    store: Arc<dyn StoryStorePort>,
}

impl StorySession {
    /// 创建会话并从存储读入已保存的故事
    ///
    /// 启动时的存储读取失败只记日志，按"还没有保存过故事"处理
    pub fn new(relay: Arc<dyn RelayApi>, store: Arc<dyn StoryStorePort>) -> Self {
        let mut state = ClientState::new();
        state.saved = match store.load_all() {
            Ok(stories) => stories,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved stories, starting empty");
                Vec::new()
            }
        };

        Self {
            state,
            relay,
            store,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    /// 提交生成请求
    ///
    /// 门控：没有叙事输入或已有请求在途时不发起网络调用，返回 false。
    /// 加载标志在成功与失败两条路径上都会被 finish_generation 清除。
    pub async fn submit_generation(&mut self) -> bool {
        if !self.state.can_generate() {
            return false;
        }

        let request = self.state.story_request();
        self.state.begin_generation();
        let result = self.relay.generate_story(&request).await;
        self.state.finish_generation(result);
        true
    }

    /// 请求随机创意
    pub async fn request_random_prompt(&mut self) -> bool {
        if self.state.loading {
            return false;
        }

        self.state.begin_random_prompt();
        let result = self.relay.generate_random_prompt().await;
        self.state.finish_random_prompt(result);
        true
    }

    /// 保存当前结果
    ///
    /// 先整体写回存储，成功后才更新内存视图；写失败则两边都保持原样。
    pub fn persist_current_story(&mut self) -> Result<SaveOutcome, StoreError> {
        if !self.state.has_result() {
            return Ok(SaveOutcome::NothingToSave);
        }

        let mut story = SavedStory::new(self.state.title.clone(), self.state.story.clone());
        // 同一毫秒内连续保存时递增去重
        while self.state.saved.iter().any(|s| s.id == story.id) {
            story.id = story.id.next();
        }
        let id = story.id;

        let mut updated = self.state.saved.clone();
        updated.push(story);
        self.store.save_all(&updated)?;
        self.state.saved = updated;

        tracing::info!(id = %id, "Story saved");

        Ok(SaveOutcome::Saved(id))
    }

    /// 加载一个已保存的故事到展示区
    pub fn load_saved_story(&mut self, id: StoryId) -> bool {
        let Some(story) = self.state.saved.iter().find(|s| s.id == id).cloned() else {
            return false;
        };
        self.state.show_saved(&story);
        true
    }

    /// 删除一个已保存的故事
    pub fn delete_saved_story(&mut self, id: StoryId) -> Result<bool, StoreError> {
        let updated: Vec<SavedStory> = self
            .state
            .saved
            .iter()
            .filter(|s| s.id != id)
            .cloned()
            .collect();

        if updated.len() == self.state.saved.len() {
            return Ok(false);
        }

        self.store.save_all(&updated)?;
        self.state.saved = updated;

        tracing::info!(id = %id, "Story deleted");

        Ok(true)
    }

    /// 全部重置
    pub fn reset_all(&mut self) {
        self.state.reset_all();
    }

    /// 导出当前结果为纯文本（标题 + 空行 + 正文）
    pub fn export_current(&self) -> Option<String> {
        if !self.state.has_result() {
            return None;
        }
        Some(format!("{}\n\n{}", self.state.title, self.state.story))
    }
}

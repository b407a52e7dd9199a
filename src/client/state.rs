//! Client State - 客户端状态与纯状态转移
//!
//! 全部 UI 状态收在一个显式结构体里，转移函数只改内存，不做 IO。
//! 加载标志的"无论成败都清除"由 begin_*/finish_* 配对保证：
//! finish_* 消费调用结果（Ok 或 Err），两条路径都会清除 loading。

use crate::client::relay_client::RelayError;
use crate::domain::story::{SavedStory, StoryDraft, StoryLength, StoryRequest, StoryTone};

/// 客户端状态
///
/// `saved` 是持久化列表在内存中的视图：启动时从存储读入，
/// 每次增删由 session 写回存储后再更新这里。
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    // 可编辑的请求字段
    pub prompt: String,
    pub main_character: String,
    pub setting: String,
    pub conflict: String,
    pub length: StoryLength,
    pub tone: StoryTone,

    // 瞬态 UI 状态
    pub title: String,
    pub story: String,
    pub error: Option<String>,
    pub loading: bool,

    // 已保存故事（视图）
    pub saved: Vec<SavedStory>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由当前输入字段构造请求
    pub fn story_request(&self) -> StoryRequest {
        StoryRequest {
            prompt: self.prompt.clone(),
            main_character: self.main_character.clone(),
            setting: self.setting.clone(),
            conflict: self.conflict.clone(),
            length: self.length,
            tone: self.tone,
        }
    }

    /// 生成是否可触发：至少一个非空白叙事字段，且没有进行中的请求
    pub fn can_generate(&self) -> bool {
        !self.loading && self.story_request().has_narrative_input()
    }

    /// 是否有可保存的结果
    pub fn has_result(&self) -> bool {
        !self.title.is_empty() && !self.story.is_empty()
    }

    /// 开始生成：清除之前的结果与错误，置加载标志
    pub fn begin_generation(&mut self) {
        self.title.clear();
        self.story.clear();
        self.error = None;
        self.loading = true;
    }

    /// 完成生成：填充结果或记录失败消息，总是清除加载标志
    pub fn finish_generation(&mut self, result: Result<StoryDraft, RelayError>) {
        match result {
            Ok(draft) => {
                self.title = if draft.title.is_empty() {
                    "Untitled Story".to_string()
                } else {
                    draft.title
                };
                self.story = if draft.story.is_empty() {
                    "No story content generated.".to_string()
                } else {
                    draft.story
                };
            }
            Err(e) => {
                self.error = Some(format!("Error: {}", e));
            }
        }
        self.loading = false;
    }

    /// 开始请求随机创意：清空所有叙事输入与之前的结果
    pub fn begin_random_prompt(&mut self) {
        self.prompt.clear();
        self.main_character.clear();
        self.setting.clear();
        self.conflict.clear();
        self.title.clear();
        self.story.clear();
        self.error = None;
        self.loading = true;
    }

    /// 完成随机创意请求：只填充 prompt 字段
    pub fn finish_random_prompt(&mut self, result: Result<String, RelayError>) {
        match result {
            Ok(prompt) => self.prompt = prompt,
            Err(e) => self.error = Some(format!("Error: {}", e)),
        }
        self.loading = false;
    }

    /// 展示一个已保存的故事：替换当前结果，清空输入字段
    pub fn show_saved(&mut self, story: &SavedStory) {
        self.title = story.title.clone();
        self.story = story.content.clone();
        self.prompt.clear();
        self.main_character.clear();
        self.setting.clear();
        self.conflict.clear();
    }

    /// 全部重置为初始值（已保存列表除外，它属于持久存储）
    pub fn reset_all(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        *self = Self {
            saved,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, story: &str) -> StoryDraft {
        StoryDraft {
            title: title.to_string(),
            story: story.to_string(),
        }
    }

    #[test]
    fn test_can_generate_requires_narrative_input() {
        let mut state = ClientState::new();
        assert!(!state.can_generate());

        state.setting = "a drowned city".to_string();
        assert!(state.can_generate());

        state.setting = "   ".to_string();
        assert!(!state.can_generate());
    }

    #[test]
    fn test_can_generate_blocked_while_loading() {
        let mut state = ClientState::new();
        state.prompt = "idea".to_string();
        state.begin_generation();
        assert!(!state.can_generate());
    }

    #[test]
    fn test_generation_success_path() {
        let mut state = ClientState::new();
        state.prompt = "idea".to_string();
        state.error = Some("old error".to_string());

        state.begin_generation();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.finish_generation(Ok(draft("The Gate", "Once.")));
        assert!(!state.loading);
        assert_eq!(state.title, "The Gate");
        assert_eq!(state.story, "Once.");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_generation_failure_clears_loading_and_records_message() {
        let mut state = ClientState::new();
        state.prompt = "idea".to_string();

        state.begin_generation();
        state.finish_generation(Err(RelayError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Error: quota exceeded"));
        assert!(state.title.is_empty());
    }

    #[test]
    fn test_empty_draft_fields_get_placeholders() {
        let mut state = ClientState::new();
        state.begin_generation();
        state.finish_generation(Ok(draft("", "")));
        assert_eq!(state.title, "Untitled Story");
        assert_eq!(state.story, "No story content generated.");
    }

    #[test]
    fn test_random_prompt_clears_inputs_and_fills_only_prompt() {
        let mut state = ClientState::new();
        state.prompt = "old".to_string();
        state.main_character = "hero".to_string();
        state.title = "Old Title".to_string();
        state.story = "Old story".to_string();

        state.begin_random_prompt();
        assert!(state.prompt.is_empty());
        assert!(state.main_character.is_empty());
        assert!(state.title.is_empty());

        state.finish_random_prompt(Ok("A fresh idea".to_string()));
        assert_eq!(state.prompt, "A fresh idea");
        assert!(state.main_character.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_show_saved_replaces_result_and_clears_inputs() {
        let mut state = ClientState::new();
        state.prompt = "idea".to_string();
        let saved = SavedStory::new("Kept", "still here");

        state.show_saved(&saved);
        assert_eq!(state.title, "Kept");
        assert_eq!(state.story, "still here");
        assert!(state.prompt.is_empty());
    }

    #[test]
    fn test_reset_all_is_idempotent_and_keeps_saved_list() {
        let mut state = ClientState::new();
        state.prompt = "idea".to_string();
        state.title = "T".to_string();
        state.error = Some("Error: x".to_string());
        state.loading = true;
        state.saved.push(SavedStory::new("Kept", "still here"));

        state.reset_all();
        let once = state.clone();
        state.reset_all();

        assert!(state.prompt.is_empty());
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.saved.len(), 1);
        assert_eq!(format!("{:?}", once), format!("{:?}", state));
    }
}

//! Story Context - Entities
//!
//! 同时作为中继 HTTP 接口的线上格式（序列化为 camelCase）

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::value_objects::{StoryId, StoryLength, StoryTone};

/// 故事生成请求
///
/// 所有叙事字段可选；length/tone 省略时取默认值（medium/neutral）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    /// 核心创意
    #[serde(default)]
    pub prompt: String,

    /// 主角
    #[serde(default)]
    pub main_character: String,

    /// 场景设定
    #[serde(default)]
    pub setting: String,

    /// 核心冲突
    #[serde(default)]
    pub conflict: String,

    /// 故事长度
    #[serde(default)]
    pub length: StoryLength,

    /// 故事基调
    #[serde(default)]
    pub tone: StoryTone,
}

impl StoryRequest {
    /// 叙事字段按固定顺序（idea, character, setting, conflict）
    pub fn narrative_fields(&self) -> [&str; 4] {
        [
            &self.prompt,
            &self.main_character,
            &self.setting,
            &self.conflict,
        ]
    }

    /// 是否至少有一个非空白叙事字段
    pub fn has_narrative_input(&self) -> bool {
        self.narrative_fields()
            .iter()
            .any(|f| !f.trim().is_empty())
    }
}

/// 生成结果
///
/// 每次请求新建，不做修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub story: String,
}

/// 已保存的故事
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStory {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    /// 保存时刻的人类可读时间
    pub date: String,
}

impl SavedStory {
    /// 以当前时刻创建新条目
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: StoryId::now(),
            title: title.into(),
            content: content.into(),
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// 导出文本（标题 + 空行 + 正文）
    pub fn export_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }
}

//! Story Context - Value Objects

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 已保存故事的唯一标识
///
/// 取保存时刻的毫秒时间戳。同一毫秒内连续保存时由调用方递增去重
/// （见 client::session）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(i64);

impl StoryId {
    /// 以当前时刻生成 ID
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// 返回下一个候选 ID（时间戳冲突时使用）
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 故事长度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl Default for StoryLength {
    fn default() -> Self {
        Self::Medium
    }
}

impl StoryLength {
    /// 提示词中使用的英文单词
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for StoryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 故事基调
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryTone {
    Neutral,
    Mysterious,
    Humorous,
    Dramatic,
    Fantasy,
    #[serde(rename = "sci-fi")]
    SciFi,
    Horror,
    Romantic,
}

impl Default for StoryTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl StoryTone {
    /// 提示词中使用的英文单词
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Mysterious => "mysterious",
            Self::Humorous => "humorous",
            Self::Dramatic => "dramatic",
            Self::Fantasy => "fantasy",
            Self::SciFi => "sci-fi",
            Self::Horror => "horror",
            Self::Romantic => "romantic",
        }
    }
}

impl std::fmt::Display for StoryTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_defaults_to_medium() {
        assert_eq!(StoryLength::default(), StoryLength::Medium);
    }

    #[test]
    fn test_tone_defaults_to_neutral() {
        assert_eq!(StoryTone::default(), StoryTone::Neutral);
    }

    #[test]
    fn test_scifi_wire_name() {
        let tone: StoryTone = serde_json::from_str("\"sci-fi\"").unwrap();
        assert_eq!(tone, StoryTone::SciFi);
        assert_eq!(serde_json::to_string(&tone).unwrap(), "\"sci-fi\"");
    }

    #[test]
    fn test_invalid_tone_rejected() {
        let result: Result<StoryTone, _> = serde_json::from_str("\"gritty\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_story_id_next_is_monotonic() {
        let id = StoryId::from_millis(1000);
        assert_eq!(id.next().as_millis(), 1001);
    }
}

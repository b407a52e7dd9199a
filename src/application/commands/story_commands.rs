//! Story Commands

use crate::domain::story::StoryRequest;

/// 生成故事
#[derive(Debug, Clone)]
pub struct GenerateStory {
    pub request: StoryRequest,
}

/// 生成随机创意
#[derive(Debug, Clone)]
pub struct GenerateRandomPrompt;

//! Domain Layer - 领域层
//!
//! Story Context: 故事请求/结果实体、长度与基调枚举、提示词构建

pub mod story;

pub use story::{
    build_story_prompt, SavedStory, StoryDraft, StoryId, StoryLength, StoryRequest, StoryTone,
    RANDOM_PROMPT_INSTRUCTION,
};

//! Story Context - 故事生成上下文

mod entities;
mod prompt;
mod value_objects;

pub use entities::{SavedStory, StoryDraft, StoryRequest};
pub use prompt::{build_story_prompt, RANDOM_PROMPT_INSTRUCTION};
pub use value_objects::{StoryId, StoryLength, StoryTone};

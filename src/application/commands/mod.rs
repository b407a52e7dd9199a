//! Application Commands

pub mod handlers;
mod story_commands;

pub use handlers::{GenerateRandomPromptHandler, GenerateStoryHandler, RandomPromptResponse};
pub use story_commands::{GenerateRandomPrompt, GenerateStory};

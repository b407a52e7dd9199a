//! Command Handlers

mod story_handlers;

pub use story_handlers::{
    GenerateRandomPromptHandler, GenerateStoryHandler, RandomPromptResponse,
};

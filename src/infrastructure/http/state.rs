//! Application State
//!
//! 中继无状态：AppState 只持有生成端口与两个命令处理器

use std::sync::Arc;

use crate::application::{
    GenerateRandomPromptHandler, GenerateStoryHandler, TextGeneratorPort,
};

/// 应用状态
pub struct AppState {
    pub generator: Arc<dyn TextGeneratorPort>,

    // Command Handlers
    pub generate_story_handler: GenerateStoryHandler,
    pub random_prompt_handler: GenerateRandomPromptHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(generator: Arc<dyn TextGeneratorPort>) -> Self {
        Self {
            generator: generator.clone(),
            generate_story_handler: GenerateStoryHandler::new(generator.clone()),
            random_prompt_handler: GenerateRandomPromptHandler::new(generator),
        }
    }
}

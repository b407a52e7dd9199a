//! Story Command Handlers

use std::sync::Arc;

use serde_json::json;

use crate::application::commands::{GenerateRandomPrompt, GenerateStory};
use crate::application::error::ApplicationError;
use crate::application::ports::{GenerateRequest, GeneratorError, TextGeneratorPort};
use crate::domain::story::{build_story_prompt, StoryDraft, RANDOM_PROMPT_INSTRUCTION};

/// 故事响应的 JSON schema（上游 generateContent 的 responseSchema 格式）
fn story_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "story": { "type": "STRING" }
        },
        "propertyOrdering": ["title", "story"]
    })
}

// ============================================================================
// GenerateStory
// ============================================================================

/// GenerateStory Handler - 拼装提示词，调用生成模型，解析返回的 JSON 文本
pub struct GenerateStoryHandler {
    generator: Arc<dyn TextGeneratorPort>,
}

impl GenerateStoryHandler {
    pub fn new(generator: Arc<dyn TextGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateStory) -> Result<StoryDraft, ApplicationError> {
        let request = command.request;

        // 至少需要一个非空白叙事字段
        if !request.has_narrative_input() {
            return Err(ApplicationError::validation(
                "At least one story field (idea, character, setting or conflict) is required.",
            ));
        }

        let prompt = build_story_prompt(&request);

        tracing::debug!(
            prompt_len = prompt.len(),
            length = %request.length,
            tone = %request.tone,
            "Generating story"
        );

        let response = self
            .generator
            .generate(GenerateRequest::with_schema(prompt, story_response_schema()))
            .await
            .map_err(|e| match e {
                GeneratorError::EmptyResponse => {
                    ApplicationError::EmptyResult("No story generated by AI.".to_string())
                }
                other => other.into(),
            })?;

        // 模型返回的文本本身就是 {"title", "story"} JSON，原样解析后返回
        let draft: StoryDraft = serde_json::from_str(&response.text).map_err(|e| {
            ApplicationError::internal(format!("Failed to parse model response: {}", e))
        })?;

        tracing::info!(title = %draft.title, story_len = draft.story.len(), "Story generated");

        Ok(draft)
    }
}

// ============================================================================
// GenerateRandomPrompt
// ============================================================================

/// 随机创意响应
#[derive(Debug, Clone)]
pub struct RandomPromptResponse {
    pub prompt: String,
}

/// GenerateRandomPrompt Handler - 固定指令文本，无 schema 约束，返回纯文本
pub struct GenerateRandomPromptHandler {
    generator: Arc<dyn TextGeneratorPort>,
}

impl GenerateRandomPromptHandler {
    pub fn new(generator: Arc<dyn TextGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        _command: GenerateRandomPrompt,
    ) -> Result<RandomPromptResponse, ApplicationError> {
        let response = self
            .generator
            .generate(GenerateRequest::plain_text(RANDOM_PROMPT_INSTRUCTION))
            .await
            .map_err(|e| match e {
                GeneratorError::EmptyResponse => {
                    ApplicationError::EmptyResult("No random prompt generated by AI.".to_string())
                }
                other => other.into(),
            })?;

        tracing::info!(prompt_len = response.text.len(), "Random prompt generated");

        Ok(RandomPromptResponse {
            prompt: response.text,
        })
    }
}

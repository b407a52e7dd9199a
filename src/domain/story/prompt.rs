//! Story Prompt Builder
//!
//! 将结构化的故事参数拼装成发给生成模型的自然语言指令。
//! 只做文本拼装，不做网络和解析。

use super::entities::StoryRequest;

/// 随机创意的固定指令文本
pub const RANDOM_PROMPT_INSTRUCTION: &str = "Generate a unique and creative story prompt, \
focusing on a main character, a unique setting, and an interesting conflict. \
Provide the response as a simple string, suitable for a text input field.";

/// 构建故事生成提示词
///
/// 结构（固定顺序）：
/// 1. 基础子句（长度 + 基调）
/// 2. 每个非空叙事字段各一个子句（idea, character, setting, conflict）
/// 3. 结尾的 JSON 格式要求
pub fn build_story_prompt(request: &StoryRequest) -> String {
    let mut prompt = format!(
        "Generate a {} creative story with a {} tone.",
        request.length, request.tone
    );

    push_clause(&mut prompt, "The core idea is", &request.prompt);
    push_clause(&mut prompt, "The main character is", &request.main_character);
    push_clause(&mut prompt, "The setting is", &request.setting);
    push_clause(&mut prompt, "The central conflict is", &request.conflict);

    prompt.push_str(
        " Provide the response as a JSON object with two fields: \
         \"title\" (string) and \"story\" (string).",
    );

    prompt
}

/// 追加一个可选子句；字段为空时不输出
fn push_clause(prompt: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        prompt.push_str(&format!(" {}: \"{}\".", label, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::{StoryLength, StoryTone};

    #[test]
    fn test_minimal_prompt_has_no_optional_clauses() {
        let request = StoryRequest::default();
        let prompt = build_story_prompt(&request);
        assert_eq!(
            prompt,
            "Generate a medium creative story with a neutral tone. \
             Provide the response as a JSON object with two fields: \
             \"title\" (string) and \"story\" (string)."
        );
    }

    #[test]
    fn test_lone_astronaut_scenario() {
        let request = StoryRequest {
            prompt: "A lone astronaut".to_string(),
            length: StoryLength::Short,
            tone: StoryTone::Mysterious,
            ..Default::default()
        };
        assert_eq!(
            build_story_prompt(&request),
            "Generate a short creative story with a mysterious tone. \
             The core idea is: \"A lone astronaut\". \
             Provide the response as a JSON object with two fields: \
             \"title\" (string) and \"story\" (string)."
        );
    }

    #[test]
    fn test_one_clause_per_nonempty_field_in_fixed_order() {
        let request = StoryRequest {
            prompt: "idea".to_string(),
            main_character: "hero".to_string(),
            setting: "mars".to_string(),
            conflict: "storm".to_string(),
            length: StoryLength::Long,
            tone: StoryTone::SciFi,
        };
        let prompt = build_story_prompt(&request);

        let idea = prompt.find("The core idea is: \"idea\".").unwrap();
        let character = prompt.find("The main character is: \"hero\".").unwrap();
        let setting = prompt.find("The setting is: \"mars\".").unwrap();
        let conflict = prompt.find("The central conflict is: \"storm\".").unwrap();
        assert!(idea < character && character < setting && setting < conflict);

        assert_eq!(prompt.matches("The core idea is").count(), 1);
        assert_eq!(prompt.matches("The main character is").count(), 1);
        assert!(prompt.starts_with("Generate a long creative story with a sci-fi tone."));
    }

    #[test]
    fn test_skipped_field_emits_no_clause() {
        let request = StoryRequest {
            setting: "a drowned city".to_string(),
            ..Default::default()
        };
        let prompt = build_story_prompt(&request);
        assert!(prompt.contains("The setting is: \"a drowned city\"."));
        assert!(!prompt.contains("The core idea is"));
        assert!(!prompt.contains("The main character is"));
        assert!(!prompt.contains("The central conflict is"));
    }
}

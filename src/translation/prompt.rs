pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following {source_language} text to {target_language}. \
     It is a description from a Dragon Ball encyclopedia; keep character, technique and place names as they are. \
     Output only the translated text without any explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    // {..._language} are placeholders for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_system_prompt() {
        let prompt = build_system_prompt("Spanish", "English");
        assert!(prompt.contains("Spanish text to English"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_system_prompt_template_has_placeholders() {
        assert!(SYSTEM_PROMPT_TEMPLATE.contains("{source_language}"));
        assert!(SYSTEM_PROMPT_TEMPLATE.contains("{target_language}"));
    }
}

use crate::{
    constants::prompts::{
        COUNT_PLACEHOLDER, QUESTION_PROMPT_EN, QUESTION_PROMPT_ID, TEXT_PLACEHOLDER,
        TYPE_PLACEHOLDER,
    },
    models::domain::{PromptLanguage, Prompt, QuestionSpec},
};

#[derive(Clone, Debug)]
pub struct PromptBuilder {
    max_text_chars: usize,
    language: PromptLanguage,
}

impl PromptBuilder {
    pub fn new(max_text_chars: usize, language: PromptLanguage) -> Self {
        Self {
            max_text_chars,
            language,
        }
    }

    /// Renders the question prompt for `text`, cut to the first
    /// `max_text_chars` characters with no boundary search.
    pub fn build(&self, text: &str, spec: &QuestionSpec) -> Prompt {
        let template = match self.language {
            PromptLanguage::En => QUESTION_PROMPT_EN,
            PromptLanguage::Id => QUESTION_PROMPT_ID,
        };
        let label = spec.question_type().label(self.language);

        let rendered = template
            .replace(COUNT_PLACEHOLDER, &spec.question_count().to_string())
            .replace(TYPE_PLACEHOLDER, label)
            .replace(TEXT_PLACEHOLDER, truncate_chars(text, self.max_text_chars));

        Prompt::new(rendered)
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

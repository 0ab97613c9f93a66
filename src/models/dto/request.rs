use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::models::domain::question_spec::DEFAULT_QUESTION_COUNT;
use crate::models::domain::{QuestionSpec, QuestionType};

fn default_question_count() -> u8 {
    DEFAULT_QUESTION_COUNT
}

/// Query string of `POST /api/questions`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsQuery {
    /// Snake-case id (`multiple_choice`) or display label ("True or False").
    #[serde(default)]
    pub question_type: Option<String>,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 15, message = "question_count must be between 1 and 15"))]
    pub question_count: u8,
}

impl GenerateQuestionsQuery {
    pub fn into_spec(self) -> AppResult<QuestionSpec> {
        self.validate()?;

        let question_type = match self.question_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<QuestionType>()?,
            _ => QuestionType::default(),
        };

        QuestionSpec::new(question_type, self.question_count)
    }
}

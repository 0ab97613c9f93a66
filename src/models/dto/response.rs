use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{PromptLanguage, QuestionSpec, QuestionType};
use crate::services::PipelineOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuestionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub question_type: QuestionType,
    pub question_label: String,
    pub question_count: u8,
    pub extracted_chars: usize,
    pub prompt_chars: usize,
    /// Generator output exactly as returned.
    pub questions: String,
    pub generated_at: DateTime<Utc>,
}

impl GenerateQuestionsResponse {
    pub fn new(
        spec: &QuestionSpec,
        language: PromptLanguage,
        outcome: PipelineOutcome,
        request_id: Option<String>,
    ) -> Self {
        GenerateQuestionsResponse {
            request_id,
            question_type: spec.question_type(),
            question_label: spec.question_type().label(language).to_string(),
            question_count: spec.question_count(),
            extracted_chars: outcome.extracted_chars,
            prompt_chars: outcome.prompt_chars,
            questions: outcome.result.into_inner(),
            generated_at: Utc::now(),
        }
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 15;
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    ShortAnswer,
    TrueFalse,
}

/// Language the prompt (and the question type labels inside it) is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    En,
    Id,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
        QuestionType::TrueFalse,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::TrueFalse => "true_false",
        }
    }

    /// Human-readable name, as interpolated into the prompt.
    pub fn label(&self, language: PromptLanguage) -> &'static str {
        match (self, language) {
            (QuestionType::MultipleChoice, PromptLanguage::En) => "Multiple Choice",
            (QuestionType::ShortAnswer, PromptLanguage::En) => "Short Answer (Essay)",
            (QuestionType::TrueFalse, PromptLanguage::En) => "True or False",
            (QuestionType::MultipleChoice, PromptLanguage::Id) => "Pilihan Ganda",
            (QuestionType::ShortAnswer, PromptLanguage::Id) => "Jawaban Singkat (Esai)",
            (QuestionType::TrueFalse, PromptLanguage::Id) => "Benar atau Salah",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(PromptLanguage::En))
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    /// Accepts the snake_case id or any of the human-readable labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        QuestionType::ALL
            .into_iter()
            .find(|t| {
                needle.eq_ignore_ascii_case(t.id())
                    || needle.eq_ignore_ascii_case(t.label(PromptLanguage::En))
                    || needle.eq_ignore_ascii_case(t.label(PromptLanguage::Id))
            })
            .ok_or_else(|| {
                AppError::ValidationError(format!("Unknown question type '{}'", needle))
            })
    }
}

impl FromStr for PromptLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(PromptLanguage::En),
            "id" | "indonesian" => Ok(PromptLanguage::Id),
            other => Err(AppError::ValidationError(format!(
                "Unknown prompt language '{}'",
                other
            ))),
        }
    }
}

/// The user's choice of question format and count for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    question_type: QuestionType,
    question_count: u8,
}

impl QuestionSpec {
    pub fn new(question_type: QuestionType, question_count: u8) -> AppResult<Self> {
        if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&question_count) {
            return Err(AppError::ValidationError(format!(
                "question_count must be between {} and {}, got {}",
                MIN_QUESTION_COUNT, MAX_QUESTION_COUNT, question_count
            )));
        }
        Ok(Self {
            question_type,
            question_count,
        })
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}

impl Default for QuestionSpec {
    fn default() -> Self {
        Self {
            question_type: QuestionType::default(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

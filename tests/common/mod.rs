use std::sync::Mutex;

use async_trait::async_trait;

use soal_server::{
    errors::{AppError, AppResult},
    models::domain::{GenerationParams, GenerationResult, Prompt},
    services::{GeneratorInfo, QuestionGenerator},
};

#[allow(dead_code)]
#[path = "../../src/test_utils.rs"]
mod test_utils;

pub use test_utils::fixtures::{pdf_with_pages, text_of_len};

/// Generator double that records every prompt it receives.
pub struct RecordingGenerator {
    pub prompts: Mutex<Vec<String>>,
    reply: Result<String, String>,
}

impl RecordingGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(text.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(reason.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl QuestionGenerator for RecordingGenerator {
    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            backend: "recording".to_string(),
            model: "stub".to_string(),
        }
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        _params: &GenerationParams,
    ) -> AppResult<GenerationResult> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        match &self.reply {
            Ok(text) => Ok(GenerationResult::new(text.clone())),
            Err(reason) => Err(AppError::Generation(reason.clone())),
        }
    }
}

//! Text-to-text question generators.
//!
//! The generator is loaded once at start-up by [`load_generator`] and shared
//! read-only by every request through `Arc<dyn QuestionGenerator>`.

pub mod huggingface;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    config::{Config, GeneratorBackend},
    errors::{AppError, AppResult},
    models::domain::{GenerationParams, GenerationResult, Prompt},
};

pub use huggingface::HuggingFaceGenerator;
pub use openai::OpenAiGenerator;

const WARMUP_PROMPT: &str = "Reply with OK.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub backend: String,
    pub model: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    fn info(&self) -> GeneratorInfo;

    async fn generate(
        &self,
        prompt: &Prompt,
        params: &GenerationParams,
    ) -> AppResult<GenerationResult>;
}

/// Builds the configured backend. With `generator_warmup` set, a tiny prompt
/// is sent first so an unreachable model fails start-up instead of the first
/// user request.
pub async fn load_generator(config: &Config) -> AppResult<Arc<dyn QuestionGenerator>> {
    let generator: Arc<dyn QuestionGenerator> = match config.generator_backend {
        GeneratorBackend::HuggingFace => Arc::new(HuggingFaceGenerator::from_config(config)?),
        GeneratorBackend::OpenAi => Arc::new(OpenAiGenerator::from_config(config)?),
    };

    let info = generator.info();
    log::info!(
        "Question generator ready: backend={} model={}",
        info.backend,
        info.model
    );

    if config.generator_warmup {
        warm_up(generator.as_ref()).await?;
    }

    Ok(generator)
}

async fn warm_up(generator: &dyn QuestionGenerator) -> AppResult<()> {
    log::info!("Warming up question generator");
    let params = GenerationParams {
        max_length: 8,
        num_beams: 1,
        early_stopping: true,
    };
    generator
        .generate(&Prompt::new(WARMUP_PROMPT), &params)
        .await
        .map_err(|e| AppError::ModelLoad(e.to_string()))?;
    log::info!("Question generator answered warm-up prompt");
    Ok(())
}

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Document, GenerationParams, GenerationResult, PromptLanguage, QuestionSpec},
    services::{
        generator::{GeneratorInfo, QuestionGenerator},
        pdf_extractor::TextExtractor,
        prompt_builder::PromptBuilder,
    },
};

/// Extracted text must be strictly longer than this to be worth prompting on.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;
/// Only this many leading characters of the document go into the prompt.
pub const DEFAULT_MAX_PROMPT_TEXT_CHARS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelinePolicy {
    pub min_text_chars: usize,
    pub max_prompt_text_chars: usize,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self {
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_prompt_text_chars: DEFAULT_MAX_PROMPT_TEXT_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Extracting,
    Prompting,
    Generating,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Idle => write!(f, "idle"),
            PipelineStage::Extracting => write!(f, "extracting"),
            PipelineStage::Prompting => write!(f, "prompting"),
            PipelineStage::Generating => write!(f, "generating"),
            PipelineStage::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub result: GenerationResult,
    pub extracted_chars: usize,
    pub prompt_chars: usize,
}

/// Runs one upload through extract → length check → prompt → generate.
pub struct QuestionPipeline {
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuestionGenerator>,
    prompt_builder: PromptBuilder,
    policy: PipelinePolicy,
    params: GenerationParams,
}

impl QuestionPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuestionGenerator>,
        policy: PipelinePolicy,
        params: GenerationParams,
        language: PromptLanguage,
    ) -> Self {
        Self {
            extractor,
            generator,
            prompt_builder: PromptBuilder::new(policy.max_prompt_text_chars, language),
            policy,
            params,
        }
    }

    pub fn from_config(
        config: &Config,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        let policy = PipelinePolicy {
            min_text_chars: config.min_text_chars,
            max_prompt_text_chars: config.max_prompt_text_chars,
        };
        let params = GenerationParams {
            max_length: config.generation_max_length,
            num_beams: config.generation_num_beams,
            early_stopping: config.generation_early_stopping,
        };
        Self::new(extractor, generator, policy, params, config.prompt_language)
    }

    pub fn generator_info(&self) -> GeneratorInfo {
        self.generator.info()
    }

    pub fn policy(&self) -> PipelinePolicy {
        self.policy
    }

    pub async fn run(
        &self,
        document: Option<Document>,
        spec: &QuestionSpec,
    ) -> AppResult<PipelineOutcome> {
        let document = match document {
            Some(doc) if !doc.is_empty() => doc,
            _ => {
                log::warn!("Submission rejected: no file attached");
                return Err(AppError::NoFile);
            }
        };

        transition(PipelineStage::Idle, PipelineStage::Extracting);
        log::info!("Extracting text from {} byte PDF", document.len());

        let extractor = Arc::clone(&self.extractor);
        let bytes = document.into_bytes();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
            .await?
            .map_err(|e| {
                log::warn!("PDF extraction failed: {}", e);
                e
            })?;

        let extracted_chars = text.char_count();
        if extracted_chars <= self.policy.min_text_chars {
            log::warn!(
                "Extracted text too short: {} characters (need more than {})",
                extracted_chars,
                self.policy.min_text_chars
            );
            return Err(AppError::too_short(
                extracted_chars,
                self.policy.min_text_chars,
            ));
        }

        transition(PipelineStage::Extracting, PipelineStage::Prompting);
        let prompt = self.prompt_builder.build(text.as_str(), spec);

        transition(PipelineStage::Prompting, PipelineStage::Generating);
        log::info!(
            "Generating {} {} question(s) from {} extracted characters",
            spec.question_count(),
            spec.question_type(),
            extracted_chars
        );
        let result = self
            .generator
            .generate(&prompt, &self.params)
            .await
            .map_err(|e| {
                log::error!("Question generation failed: {}", e);
                match e {
                    AppError::Generation(_) => e,
                    other => AppError::Generation(other.to_string()),
                }
            })?;

        transition(PipelineStage::Generating, PipelineStage::Done);
        Ok(PipelineOutcome {
            result,
            extracted_chars,
            prompt_chars: prompt.char_count(),
        })
    }
}

fn transition(from: PipelineStage, to: PipelineStage) {
    log::debug!("pipeline {} -> {}", from, to);
}

use std::{env, fmt, str::FromStr};

use secrecy::SecretString;

use crate::models::domain::{
    generation::{DEFAULT_MAX_LENGTH, DEFAULT_NUM_BEAMS},
    PromptLanguage,
};
use crate::services::question_pipeline::{DEFAULT_MAX_PROMPT_TEXT_CHARS, DEFAULT_MIN_TEXT_CHARS};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
pub const DEFAULT_GENERATOR_MODEL: &str = "google/flan-t5-base";
pub const DEFAULT_HF_API_BASE: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorBackend {
    HuggingFace,
    OpenAi,
}

impl GeneratorBackend {
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorBackend::HuggingFace => "huggingface",
            GeneratorBackend::OpenAi => "openai",
        }
    }

    fn default_api_base(&self) -> &'static str {
        match self {
            GeneratorBackend::HuggingFace => DEFAULT_HF_API_BASE,
            GeneratorBackend::OpenAi => DEFAULT_OPENAI_API_BASE,
        }
    }
}

impl FromStr for GeneratorBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "huggingface" | "hf" => Ok(GeneratorBackend::HuggingFace),
            "openai" => Ok(GeneratorBackend::OpenAi),
            other => Err(format!("unknown generator backend '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub allowed_origins: Vec<String>,
    pub generator_backend: GeneratorBackend,
    pub generator_api_base: String,
    pub generator_model: String,
    pub generator_api_key: Option<SecretString>,
    pub generator_warmup: bool,
    pub generation_max_length: u32,
    pub generation_num_beams: u32,
    pub generation_early_stopping: bool,
    pub min_text_chars: usize,
    pub max_prompt_text_chars: usize,
    pub prompt_language: PromptLanguage,
}

impl Config {
    pub fn from_env() -> Self {
        let generator_backend = parse_choice(
            "GENERATOR_BACKEND",
            env::var("GENERATOR_BACKEND").ok(),
            GeneratorBackend::HuggingFace,
        );

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_var("WEB_SERVER_PORT", 8080),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| split_list(&origins))
                .unwrap_or_default(),
            generator_backend,
            generator_api_base: env::var("GENERATOR_API_BASE")
                .unwrap_or_else(|_| generator_backend.default_api_base().to_string()),
            generator_model: env::var("GENERATOR_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENERATOR_MODEL.to_string()),
            generator_api_key: env::var("GENERATOR_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            generator_warmup: parse_var("GENERATOR_WARMUP", false),
            generation_max_length: parse_var("GENERATION_MAX_LENGTH", DEFAULT_MAX_LENGTH),
            generation_num_beams: parse_var("GENERATION_NUM_BEAMS", DEFAULT_NUM_BEAMS),
            generation_early_stopping: parse_var("GENERATION_EARLY_STOPPING", true),
            min_text_chars: parse_var("MIN_TEXT_CHARS", DEFAULT_MIN_TEXT_CHARS),
            max_prompt_text_chars: parse_var(
                "MAX_PROMPT_TEXT_CHARS",
                DEFAULT_MAX_PROMPT_TEXT_CHARS,
            ),
            prompt_language: parse_choice(
                "PROMPT_LANGUAGE",
                env::var("PROMPT_LANGUAGE").ok(),
                PromptLanguage::default(),
            ),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
            allowed_origins: Vec::new(),
            generator_backend: GeneratorBackend::HuggingFace,
            generator_api_base: "http://localhost:9999".to_string(),
            generator_model: DEFAULT_GENERATOR_MODEL.to_string(),
            generator_api_key: None,
            generator_warmup: false,
            generation_max_length: DEFAULT_MAX_LENGTH,
            generation_num_beams: DEFAULT_NUM_BEAMS,
            generation_early_stopping: true,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_prompt_text_chars: DEFAULT_MAX_PROMPT_TEXT_CHARS,
            prompt_language: PromptLanguage::En,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid value for {}: '{}'", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Named-choice settings fall back to `default` with a warning when the
/// value is not recognised.
fn parse_choice<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", key, e);
            default
        }),
        None => default,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

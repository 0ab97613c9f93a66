use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{GeneratorInfo, QuestionGenerator};
use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{GenerationParams, GenerationResult, Prompt},
};

/// Hugging Face style inference endpoint (`POST {api_base}/models/{model}`)
/// serving a text2text model such as flan-t5.
pub struct HuggingFaceGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    num_beams: u32,
    early_stopping: bool,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Failure { error: String },
}

impl HuggingFaceGenerator {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let model = config.generator_model.trim();
        if model.is_empty() {
            return Err(AppError::ModelLoad(
                "GENERATOR_MODEL must name a model".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ModelLoad(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: inference_endpoint(&config.generator_api_base, model),
            model: model.to_string(),
            api_key: config.generator_api_key.clone(),
        })
    }
}

#[async_trait]
impl QuestionGenerator for HuggingFaceGenerator {
    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            backend: "huggingface".to_string(),
            model: self.model.clone(),
        }
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        params: &GenerationParams,
    ) -> AppResult<GenerationResult> {
        let body = build_request(prompt, params);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        log::debug!(
            "Sending {} prompt characters to {}",
            prompt.char_count(),
            self.endpoint
        );
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        parse_response(status, &text)
    }
}

fn inference_endpoint(api_base: &str, model: &str) -> String {
    format!("{}/models/{}", api_base.trim_end_matches('/'), model)
}

fn build_request<'a>(prompt: &'a Prompt, params: &GenerationParams) -> InferenceRequest<'a> {
    InferenceRequest {
        inputs: prompt.as_str(),
        parameters: InferenceParameters {
            max_length: params.max_length,
            num_beams: params.num_beams,
            early_stopping: params.early_stopping,
        },
        options: InferenceOptions {
            wait_for_model: true,
            use_cache: false,
        },
    }
}

fn parse_response(status: StatusCode, body: &str) -> AppResult<GenerationResult> {
    let parsed = serde_json::from_str::<InferenceResponse>(body);

    if !status.is_success() {
        let reason = match parsed {
            Ok(InferenceResponse::Failure { error }) => error,
            _ => body.chars().take(200).collect(),
        };
        log::warn!("Inference endpoint returned {}: {}", status, reason);
        return Err(AppError::Generation(format!(
            "inference endpoint returned {}: {}",
            status, reason
        )));
    }

    match parsed {
        Ok(InferenceResponse::Batch(mut outputs)) if !outputs.is_empty() => {
            Ok(GenerationResult::new(outputs.swap_remove(0).generated_text))
        }
        Ok(InferenceResponse::Single(output)) => Ok(GenerationResult::new(output.generated_text)),
        Ok(InferenceResponse::Failure { error }) => Err(AppError::Generation(error)),
        Ok(InferenceResponse::Batch(_)) => Err(AppError::Generation(
            "inference endpoint returned no generated text".to_string(),
        )),
        Err(e) => Err(AppError::Generation(format!(
            "unexpected inference response: {}",
            e
        ))),
    }
}

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use super::{GeneratorInfo, QuestionGenerator};
use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{GenerationParams, GenerationResult, Prompt},
};

/// OpenAI-compatible chat completion endpoint. The prompt is sent as a single
/// user message; chat endpoints have no beam search, so only `max_length` is
/// forwarded.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.generator_api_key.as_ref().ok_or_else(|| {
            AppError::ModelLoad("GENERATOR_API_KEY is required for the openai backend".to_string())
        })?;

        let model = config.generator_model.trim();
        if model.is_empty() {
            return Err(AppError::ModelLoad(
                "GENERATOR_MODEL must name a model".to_string(),
            ));
        }

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&config.generator_api_base);

        Ok(Self {
            client: Client::with_config(openai_config),
            model: model.to_string(),
        })
    }

    fn build_request(
        &self,
        prompt: &Prompt,
        params: &GenerationParams,
    ) -> AppResult<CreateChatCompletionRequest> {
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.as_str())
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .max_completion_tokens(params.max_length)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiGenerator {
    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            backend: "openai".to_string(),
            model: self.model.clone(),
        }
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        params: &GenerationParams,
    ) -> AppResult<GenerationResult> {
        let request = self.build_request(prompt, params)?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::warn!("Chat completion call failed: {}", e);
            AppError::from(e)
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::Generation("model returned no content".to_string()))?;

        Ok(GenerationResult::new(content))
    }
}

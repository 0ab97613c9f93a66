use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{load_generator, LopdfExtractor, QuestionGenerator, QuestionPipeline},
};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<QuestionPipeline>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Loads the generator once; every request then shares it.
    pub async fn new(config: Config) -> AppResult<Self> {
        let generator = load_generator(&config).await?;
        Ok(Self::with_generator(config, generator))
    }

    pub fn with_generator(config: Config, generator: Arc<dyn QuestionGenerator>) -> Self {
        let pipeline = Arc::new(QuestionPipeline::from_config(
            &config,
            Arc::new(LopdfExtractor::new()),
            generator,
        ));

        Self {
            pipeline,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn test_app_state_loads_default_generator() {
        let state = AppState::new(Config::test_config()).await.ok().unwrap();
        assert_eq!(state.pipeline.generator_info().backend, "huggingface");
    }
}

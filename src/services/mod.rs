pub mod generator;
pub mod http_helpers;
pub mod pdf_extractor;
pub mod prompt_builder;
pub mod question_pipeline;

pub use generator::{load_generator, GeneratorInfo, QuestionGenerator};
pub use pdf_extractor::{LopdfExtractor, TextExtractor};
pub use prompt_builder::PromptBuilder;
pub use question_pipeline::{PipelineOutcome, PipelinePolicy, QuestionPipeline};

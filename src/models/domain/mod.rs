pub mod document;
pub mod generation;
pub mod question_spec;
pub use document::{Document, ExtractedText};
pub use generation::{GenerationParams, GenerationResult, Prompt};
pub use question_spec::{PromptLanguage, QuestionSpec, QuestionType};

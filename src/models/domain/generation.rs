use serde::Serialize;

pub const DEFAULT_MAX_LENGTH: u32 = 1024;
pub const DEFAULT_NUM_BEAMS: u32 = 5;

/// Instruction text submitted to the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoding settings passed along with every prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_beams: u32,
    pub early_stopping: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            num_beams: DEFAULT_NUM_BEAMS,
            early_stopping: true,
        }
    }
}

/// Raw generator output, shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult(String);

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Please upload a PDF file first")]
    NoFile,

    #[error("Failed to read the PDF file: {0}")]
    Extraction(String),

    #[error("The PDF is too large (the limit is {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("{message}")]
    TooShort {
        chars: usize,
        min_chars: usize,
        message: String,
    },

    #[error("Failed to generate questions: {0}")]
    Generation(String),

    #[error("Failed to load the question generator: {0}")]
    ModelLoad(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl AppError {
    pub fn too_short(chars: usize, min_chars: usize) -> Self {
        let message = if chars == 0 {
            "No text could be extracted from the PDF. The file may be scanned images or protected."
                .to_string()
        } else {
            format!(
                "The PDF text is too short to build questions from ({} characters, more than {} required). Please use a PDF with longer content.",
                chars, min_chars
            )
        };
        AppError::TooShort {
            chars,
            min_chars,
            message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoFile => "NO_FILE",
            AppError::Extraction(_) => "EXTRACTION_FAILED",
            AppError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            AppError::TooShort { .. } => "TEXT_TOO_SHORT",
            AppError::Generation(_) => "GENERATION_FAILED",
            AppError::ModelLoad(_) => "MODEL_LOAD_FAILED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoFile
            | AppError::PayloadTooLarge { .. }
            | AppError::TooShort { .. }
            | AppError::ValidationError(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub level: Severity,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoFile => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::TooShort { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            level: self.severity(),
        })
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::Extraction(err.to_string())
    }
}
impl From<actix_web::error::PayloadError> for AppError {
    fn from(err: actix_web::error::PayloadError) -> Self {
        AppError::ValidationError(format!("Failed to read the upload: {}", err))
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Generation(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Generation(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

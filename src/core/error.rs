use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::time::Duration;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Missing or malformed input, raised before any storage call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced identifier has no present record
    #[error("{0}")]
    NotFound(String),

    /// Storage engine failure
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Storage call exceeded its deadline
    #[error("Storage timed out after {0:?}")]
    StorageTimeout(Duration),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Engine details stay in the logs.
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(_) | AppError::StorageTimeout(_) => {
                tracing::error!(error = %self, "Storage failure while serving request");
                "Database error".to_string()
            }
            AppError::Configuration(_) => "Internal server error".to_string(),
        };

        HttpResponse::build(status_code).json(serde_json::json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageTimeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// True for failures a caller may retry with backoff
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::StorageTimeout(_))
    }
}

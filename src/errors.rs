use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Missing configuration. Please ensure .env file contains {}.", .0.join(", "))]
    MissingConfig(Vec<String>),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Scrape error: {0}")]
    ScrapeError(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingConfig(_) => "MISSING_CONFIG",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ScrapeError(_) => "SCRAPE_ERROR",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::SnapshotError(_) => "SNAPSHOT_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ScrapeError(_) | AppError::ModelError(_) | AppError::DatabaseError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::MissingConfig(_)
            | AppError::SnapshotError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.url() {
            Some(url) => AppError::ScrapeError(format!("{}: {}", url, err)),
            None => AppError::ScrapeError(err.to_string()),
        }
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SnapshotError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelError("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::SnapshotError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::DatabaseError("row rejected".into());
        assert_eq!(err.to_string(), "Database error: row rejected");
    }

    #[test]
    fn test_missing_config_lists_every_variable() {
        let err = AppError::MissingConfig(vec![
            "OPENAI_API_KEY".to_string(),
            "SUPABASE_KEY".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing configuration. Please ensure .env file contains OPENAI_API_KEY, SUPABASE_KEY."
        );
        assert_eq!(err.error_code(), "MISSING_CONFIG");
    }
}

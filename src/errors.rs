use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors surfaced to API callers as `{"detail": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Persistence failed, the change was rolled back
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn todo_not_found() -> Self {
        Self::NotFound("Todo not found".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string(),
        }))
    }
}

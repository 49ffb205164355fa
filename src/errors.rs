use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `ResponseError` so handlers can return `Result<HttpResponse, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("Route not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Something went wrong, Contact with system admin")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(json!({
                    "status": false,
                    "message": self.to_string(),
                    "errors": errors,
                }))
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                HttpResponse::build(self.status_code()).json(json!({
                    "status": false,
                    "message": self.to_string(),
                }))
            }
            AppError::Internal(e) => {
                tracing::error!(error = ?e, "Unexpected error");
                HttpResponse::build(self.status_code()).json(json!({
                    "status": false,
                    "message": self.to_string(),
                }))
            }
            _ => HttpResponse::build(self.status_code()).json(json!({
                "status": false,
                "message": self.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("Email already taken".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("Account is disabled".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthenticated_message_is_generic() {
        // the same text regardless of whether the user was missing or the
        // password was wrong
        assert_eq!(AppError::Unauthenticated.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_internal_message_is_fixed() {
        let err = AppError::Internal(anyhow::anyhow!("secret detail"));
        assert!(!err.to_string().contains("secret detail"));
    }
}

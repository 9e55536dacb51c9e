use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::{ApiErrorBody, FieldError};
use thiserror::Error;

/// Ошибки операций с организациями
#[derive(Debug, Error)]
pub enum OrganizationError {
    #[error("{}", .0.first().map(|e| e.message.as_str()).unwrap_or("Invalid data"))]
    Validation(Vec<FieldError>),

    #[error("Name taken")]
    NameTaken,

    #[error("Organization not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl OrganizationError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrganizationError::Validation(_) => StatusCode::BAD_REQUEST,
            OrganizationError::NameTaken => StatusCode::CONFLICT,
            OrganizationError::NotFound => StatusCode::NOT_FOUND,
            OrganizationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OrganizationError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            OrganizationError::Validation(errors) => ApiErrorBody {
                message: errors.first().map(|e| e.message.clone()),
                errors,
            },
            OrganizationError::Internal(e) => {
                // детали наружу не отдаём
                tracing::error!("organization operation failed: {:#}", e);
                ApiErrorBody::with_message("Internal server error")
            }
            other => ApiErrorBody::with_message(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

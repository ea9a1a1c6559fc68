use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::core::{eligibility::SelectionRejection, roster::RosterError};
use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by the HTTP API
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionRejection),

    #[error("{0}")]
    InvalidRoster(#[from] RosterError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidToken => "invalid_token",
            AppError::InvalidSelection(_) => "invalid_selection",
            AppError::InvalidRoster(_) => "invalid_csv",
            AppError::Validation(_) => "validation_failed",
            AppError::InvalidUpload(_) => "invalid_upload",
            AppError::InvalidJson(_) => "invalid_json",
            AppError::Store(_) => "storage_error",
        }
    }
}

impl error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidToken => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AppError::InvalidJson(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InvalidSelection(SelectionRejection::SelfSelection(1)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Store(StoreError::SqlxError(sqlx::Error::RowNotFound)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_roster_message_passes_through() {
        let err = AppError::from(RosterError::NotCsv);
        assert_eq!(err.to_string(), "File must be a CSV");
    }
}
